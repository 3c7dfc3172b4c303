pub mod builder;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod render;
pub mod view;

use std::time::Duration;

pub use builder::RecipeViewBuilder;
pub use config::ViewConfig;
pub use error::FetchError;
pub use fetcher::{RecipeFetcher, RecipeSource};
pub use model::{Ingredient, RawIngredient, RawRecipe, Recipe};
pub use render::{HtmlRenderer, TemplateRenderer, PLACEHOLDER_MARKUP, SPINNER_MARKUP};
pub use view::{
    fragment_id, ContainerSink, CycleOutcome, LogNotifier, NavEvent, Notifier, RecipeView,
    ViewState,
};

/// Fetch and normalize a single recipe using the configured service.
///
/// Convenience wrapper for callers that do not need the full view; the
/// orchestrator goes through [`RecipeSource`] instead.
pub async fn fetch_recipe(id: &str) -> Result<Recipe, FetchError> {
    let config = ViewConfig::load()?;
    let fetcher = RecipeFetcher::new(config.base_url, Some(Duration::from_secs(config.timeout)));
    fetcher.fetch_recipe(id).await
}
