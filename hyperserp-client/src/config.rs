//! Client configuration with sensible defaults.
//!
//! [`ClientConfig`] controls where the backend lives and how many results
//! are requested per search. The default base URL matches the backend's
//! local development bind address.

use crate::error::ClientError;
use url::Url;

/// Configuration for a [`crate::SearchClient`].
///
/// Use [`Default::default()`] for local development, or construct with
/// field overrides for a deployed backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the search backend, without a trailing `/search`.
    pub base_url: String,
    /// Number of results to request per search (`top_k` query parameter).
    pub top_k: usize,
    /// Custom User-Agent string. `None` uses reqwest's default.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            top_k: 10,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must parse as an absolute `http` or `https` URL
    /// - `top_k` must be greater than 0
    pub fn validate(&self) -> Result<(), ClientError> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base_url: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::Config(format!(
                "base_url must be http or https, got {}",
                parsed.scheme()
            )));
        }
        if self.top_k == 0 {
            return Err(ClientError::Config("top_k must be greater than 0".into()));
        }
        Ok(())
    }
}
