use thiserror::Error;

/// Errors returned by [`crate::clients::LookupClient`] when the lookup actor
/// cannot be reached.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Start-up configuration errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Buffer size must be at least 1")]
    ZeroBufferSize,
}
