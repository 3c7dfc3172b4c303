use thiserror::Error;

/// Errors that can occur while fetching a recipe record
#[derive(Error, Debug)]
pub enum FetchError {
    /// The remote call did not settle within the configured deadline
    #[error("Request took too long! Timeout after {0} seconds")]
    Timeout(u64),

    /// The remote responded with a non-success status
    #[error("{message} ({status})")]
    Http { status: u16, message: String },

    /// The underlying transport failed (DNS, connection refused, aborted)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not parseable as the expected structure
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The navigation trigger carried no recipe id
    #[error("No recipe id in the current location")]
    EmptyId,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
