//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse gesture config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid gesture config: {0}")]
    Invalid(String),
}
