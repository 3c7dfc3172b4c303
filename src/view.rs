use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, error};
use tokio::sync::{mpsc, Mutex};

use crate::error::FetchError;
use crate::fetcher::RecipeSource;
use crate::model::Recipe;
use crate::render::{TemplateRenderer, PLACEHOLDER_MARKUP, SPINNER_MARKUP};

/// The insertion point the orchestrator clears and populates.
pub trait ContainerSink: Send {
    /// Replace all contents with `markup`.
    fn replace(&mut self, markup: &str);
    /// Append `markup` after the current contents.
    fn append(&mut self, markup: &str);
}

/// User-facing channel for fetch failures.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Default notifier: surfaces failures through the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        error!("{}", message);
    }
}

/// Display state of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Placeholder,
    Loading,
    Loaded,
    Error,
}

/// A navigation trigger carrying the target location.
#[derive(Debug, Clone)]
pub enum NavEvent {
    /// Initial page load.
    PageLoad(String),
    /// The location fragment changed.
    HashChange(String),
}

impl NavEvent {
    pub fn location(&self) -> &str {
        match self {
            NavEvent::PageLoad(location) | NavEvent::HashChange(location) => location,
        }
    }
}

/// Extracts the trailing fragment identifier from a navigation target.
///
/// Returns `None` when the location has no fragment or an empty one;
/// the caller routes that through the empty-id failure path.
pub fn fragment_id(location: &str) -> Option<&str> {
    let (_, fragment) = location.split_once('#')?;
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

/// Result of a single render cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    /// The container now shows this recipe.
    Loaded(Recipe),
    /// The fetch failed; the container shows the placeholder.
    Failed(FetchError),
    /// A newer cycle started before this one finished; its result was
    /// discarded without touching the container.
    Superseded,
}

struct Shared {
    sink: Box<dyn ContainerSink>,
    state: ViewState,
}

/// Drives fetches and owns the container for the duration of each cycle.
pub struct RecipeView {
    source: Box<dyn RecipeSource>,
    renderer: Box<dyn TemplateRenderer>,
    notifier: Box<dyn Notifier>,
    shared: Mutex<Shared>,
    generation: AtomicU64,
}

impl RecipeView {
    pub fn new(
        source: Box<dyn RecipeSource>,
        sink: Box<dyn ContainerSink>,
        renderer: Box<dyn TemplateRenderer>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            source,
            renderer,
            notifier,
            shared: Mutex::new(Shared {
                sink,
                state: ViewState::Placeholder,
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// Creates a new builder for configuring a view.
    pub fn builder() -> crate::builder::RecipeViewBuilder {
        crate::builder::RecipeViewBuilder::default()
    }

    pub async fn state(&self) -> ViewState {
        self.shared.lock().await.state
    }

    /// Run one render cycle for `id`.
    ///
    /// The loading indicator goes up before the fetch is awaited, so the
    /// user sees feedback even when the fetch fails immediately. A cycle
    /// that finds itself outdated after its fetch settles discards the
    /// result instead of overwriting a fresher one.
    pub async fn show_recipe(&self, id: &str) -> CycleOutcome {
        // Claim the generation under the container lock: sink writes then
        // happen in generation order, so a cycle preempted between its
        // claim and its spinner write cannot paint over a newer cycle's
        // terminal markup.
        let generation = {
            let mut shared = self.shared.lock().await;
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            shared.state = ViewState::Loading;
            shared.sink.replace(SPINNER_MARKUP);
            generation
        };
        debug!("render cycle {} for id {:?}", generation, id);

        let result = self.source.fetch_recipe(id).await;

        let mut shared = self.shared.lock().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("render cycle {} superseded, discarding result", generation);
            return CycleOutcome::Superseded;
        }

        match result {
            Ok(recipe) => {
                let markup = self.renderer.render(&recipe);
                shared.sink.replace("");
                shared.sink.append(&markup);
                shared.state = ViewState::Loaded;
                CycleOutcome::Loaded(recipe)
            }
            Err(err) => {
                shared.sink.replace(PLACEHOLDER_MARKUP);
                shared.state = ViewState::Error;
                self.notifier.notify(&err.to_string());
                CycleOutcome::Failed(err)
            }
        }
    }

    /// Handle one navigation trigger.
    ///
    /// A missing or empty fragment is not a silent no-op: it runs through
    /// the cycle and fails with the empty-id error.
    pub async fn handle_event(&self, event: &NavEvent) -> CycleOutcome {
        let id = fragment_id(event.location()).unwrap_or("");
        self.show_recipe(id).await
    }

    /// Consume navigation events until the channel closes.
    ///
    /// Cycles are spawned, not awaited in turn, so overlapping triggers
    /// behave like overlapping navigation in a browser; the generation
    /// guard in `show_recipe` keeps stale results off the screen.
    pub async fn run(self: Arc<Self>, mut events: mpsc::Receiver<NavEvent>) {
        while let Some(event) = events.recv().await {
            let view = Arc::clone(&self);
            tokio::spawn(async move {
                view.handle_event(&event).await;
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_id_extracts_trailing_identifier() {
        assert_eq!(
            fragment_id("http://localhost:1234/#5ed6604591c37cdc054bc886"),
            Some("5ed6604591c37cdc054bc886")
        );
        assert_eq!(fragment_id("#abc"), Some("abc"));
    }

    #[test]
    fn fragment_id_rejects_missing_or_empty_fragment() {
        assert_eq!(fragment_id("http://localhost:1234/"), None);
        assert_eq!(fragment_id("http://localhost:1234/#"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn nav_event_exposes_location_for_both_kinds() {
        assert_eq!(NavEvent::PageLoad("a#b".to_string()).location(), "a#b");
        assert_eq!(NavEvent::HashChange("c#d".to_string()).location(), "c#d");
    }
}
