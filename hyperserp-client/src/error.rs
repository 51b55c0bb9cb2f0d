//! Error types for the hyperserp-client crate.
//!
//! These errors never cross the public search boundary: [`crate::SearchClient`]
//! collapses every failure to an empty result list after logging the cause.
//! They exist so the fallible path stays an ordinary `Result` internally.

/// Errors that can occur while talking to the search backend.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The HTTP request could not be sent or the connection failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend answered with a non-success status code.
    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    /// The response body was not valid JSON of the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Convenience type alias for hyperserp-client results.
pub type Result<T> = std::result::Result<T, ClientError>;
