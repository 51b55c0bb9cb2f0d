//! # hyperserp-client
//!
//! HTTP client for the HyperSerp search API.
//!
//! This crate issues one unauthenticated `GET {base_url}/search?q=…` per
//! search and decodes the JSON response envelope. It compiles into the
//! terminal client as a library dependency, but is usable standalone.
//!
//! ## Design
//!
//! - One request per search: no retry, no request timeout, no cancellation
//! - Every failure mode (network error, non-2xx status, malformed body)
//!   collapses to an empty result list; the caller never sees an error
//! - Failure causes are logged at warn level for diagnostics
//! - Queries are percent-encoded as a single `q` parameter value

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::SearchClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use types::{SearchResponse, SearchResult};

/// Search with an ad-hoc client built from `config`.
///
/// Convenience wrapper for one-off searches; longer-lived callers should
/// construct a [`SearchClient`] once and reuse its connection pool. Like
/// [`SearchClient::search`], this never fails — an invalid configuration is
/// logged and resolves to an empty list.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// let config = hyperserp_client::ClientConfig::default();
/// let results = hyperserp_client::search("rust programming", &config).await;
/// for result in &results {
///     println!("{:?}: {:?}", result.title, result.url);
/// }
/// # }
/// ```
pub async fn search(query: &str, config: &ClientConfig) -> Vec<SearchResult> {
    match SearchClient::new(config.clone()) {
        Ok(client) => client.search(query).await,
        Err(err) => {
            tracing::warn!(error = %err, "search client construction failed");
            Vec::new()
        }
    }
}
