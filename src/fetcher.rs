use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::error::FetchError;
use crate::model::{ErrorBody, Recipe, RecipeEnvelope};

/// Where recipe records come from.
///
/// The orchestrator only depends on this trait, so tests can substitute a
/// deterministic source for the real HTTP client.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch and normalize the recipe identified by `id`.
    async fn fetch_recipe(&self, id: &str) -> Result<Recipe, FetchError>;
}

/// Fetches recipe records from the remote HTTP service.
pub struct RecipeFetcher {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RecipeFetcher {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let timeout = timeout.unwrap_or(Duration::from_secs(10));
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; RecipeViewBot/1.0)")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            timeout,
        }
    }

    async fn get_recipe(&self, url: &str) -> Result<Recipe, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Validate the HTTP status before attempting payload semantics.
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(FetchError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: RecipeEnvelope = serde_json::from_str(&body)?;
        let recipe = Recipe::from(envelope.data.recipe);
        debug!("fetched recipe {} ({})", recipe.id, recipe.title);
        Ok(recipe)
    }
}

#[async_trait]
impl RecipeSource for RecipeFetcher {
    /// Single attempt, no retries. The request future races the deadline;
    /// on expiry it is dropped, which aborts the in-flight call rather
    /// than leaving it running.
    async fn fetch_recipe(&self, id: &str) -> Result<Recipe, FetchError> {
        if id.is_empty() {
            return Err(FetchError::EmptyId);
        }

        let url = format!("{}/recipes/{}", self.base_url, id);
        debug!("GET {}", url);

        match tokio::time::timeout(self.timeout, self.get_recipe(&url)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("request for recipe {} timed out", id);
                Err(FetchError::Timeout(self.timeout.as_secs()))
            }
        }
    }
}
