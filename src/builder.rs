use std::time::Duration;

use crate::config::ViewConfig;
use crate::error::FetchError;
use crate::fetcher::{RecipeFetcher, RecipeSource};
use crate::render::{HtmlRenderer, TemplateRenderer};
use crate::view::{ContainerSink, LogNotifier, Notifier, RecipeView};

/// Builder for configuring a [`RecipeView`]
///
/// A container sink is required; everything else has a sensible default
/// (HTTP fetcher against the configured service, HTML renderer, log-based
/// notifier).
#[derive(Default)]
pub struct RecipeViewBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    source: Option<Box<dyn RecipeSource>>,
    sink: Option<Box<dyn ContainerSink>>,
    renderer: Option<Box<dyn TemplateRenderer>>,
    notifier: Option<Box<dyn Notifier>>,
}

impl RecipeViewBuilder {
    /// Set the base URL of the remote recipe service
    ///
    /// # Example
    /// ```no_run
    /// use recipe_view::RecipeView;
    ///
    /// let builder = RecipeView::builder()
    ///     .base_url("https://forkify-api.herokuapp.com/api/v2");
    /// ```
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout for the remote call
    ///
    /// # Example
    /// ```no_run
    /// use recipe_view::RecipeView;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeView::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Replace the HTTP fetcher with a custom recipe source
    ///
    /// Overrides `base_url` and `timeout`, which only configure the
    /// default fetcher.
    pub fn source(mut self, source: Box<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the container sink the view renders into (required)
    pub fn sink(mut self, sink: Box<dyn ContainerSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace the default HTML renderer
    pub fn renderer(mut self, renderer: Box<dyn TemplateRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Replace the default log-based notifier
    pub fn notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the view
    ///
    /// # Errors
    /// Returns `FetchError::Builder` if no container sink was specified.
    pub fn build(self) -> Result<RecipeView, FetchError> {
        let sink = self.sink.ok_or_else(|| {
            FetchError::Builder("No container sink specified. Use .sink()".to_string())
        })?;

        let source: Box<dyn RecipeSource> = match self.source {
            Some(source) => source,
            None => {
                let defaults = ViewConfig::default();
                let base_url = self.base_url.unwrap_or(defaults.base_url);
                let timeout = self
                    .timeout
                    .unwrap_or(Duration::from_secs(defaults.timeout));
                Box::new(RecipeFetcher::new(base_url, Some(timeout)))
            }
        };

        let renderer = self
            .renderer
            .unwrap_or_else(|| Box::new(HtmlRenderer::default()));
        let notifier = self
            .notifier
            .unwrap_or_else(|| Box::new(LogNotifier::default()));

        Ok(RecipeView::new(source, sink, renderer, notifier))
    }
}
