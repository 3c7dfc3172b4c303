use std::env;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use recipe_view::{ContainerSink, CycleOutcome, NavEvent, RecipeView, ViewConfig};

/// Container sink backed by a shared string buffer, so the markup can be
/// read back after the view renders into it.
#[derive(Clone, Default)]
struct BufferSink(Arc<Mutex<String>>);

impl ContainerSink for BufferSink {
    fn replace(&mut self, markup: &str) {
        *self.0.lock().unwrap() = markup.to_string();
    }

    fn append(&mut self, markup: &str) {
        self.0.lock().unwrap().push_str(markup);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Get the navigation target from command-line arguments
    let args: Vec<String> = env::args().collect();
    let arg = args
        .get(1)
        .ok_or("Please provide a recipe id or a navigation target like '#<id>'")?;

    // Accept a bare id as well as a full '#'-fragment target
    let target = if arg.contains('#') {
        arg.clone()
    } else {
        format!("#{}", arg)
    };

    let config = ViewConfig::load()?;
    let sink = BufferSink::default();
    let view = RecipeView::builder()
        .base_url(config.base_url)
        .timeout(Duration::from_secs(config.timeout))
        .sink(Box::new(sink.clone()))
        .build()?;

    let outcome = view.handle_event(&NavEvent::PageLoad(target)).await;
    println!("{}", sink.0.lock().unwrap());

    match outcome {
        CycleOutcome::Failed(err) => Err(Box::new(err) as Box<dyn Error>),
        _ => Ok(()),
    }
}
