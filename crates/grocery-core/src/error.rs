//! Error Types

use thiserror::Error;

/// Common result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// A remote operation failed. `Display` is the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Request never produced a response
    #[error("{0}")]
    Transport(String),
    /// The row store answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Response body did not match the expected shape
    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing row store URL")]
    MissingUrl,
    #[error("missing API key")]
    MissingApiKey,
    #[error("invalid row store URL `{0}`")]
    InvalidUrl(String),
}
