//! Error types for the counter app.

use crate::config::ConfigError;

/// Counter errors.
#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rendering error: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Convenience type alias for Results with CounterError.
pub type CounterResult<T> = Result<T, CounterError>;
