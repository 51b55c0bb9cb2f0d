//! The search client: one HTTP GET per search, failures collapse to empty.
//!
//! [`SearchClient::search`] is deliberately infallible. Network failures,
//! non-2xx statuses, and malformed bodies are all logged and then collapsed
//! to an empty result list — callers never need to distinguish "no results"
//! from "search failed", and consequently cannot. No retry, no request
//! timeout, no cancellation of in-flight requests.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::{SearchResponse, SearchResult};

/// HTTP client for the HyperSerp `/search` endpoint.
///
/// Holds a connection-pooled [`reqwest::Client`]; cheap to clone.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SearchClient {
    /// Create a client from a validated configuration.
    ///
    /// No request timeout is configured: a hung backend keeps the request
    /// in flight indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if `config` is invalid, or
    /// [`ClientError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(ref ua) = config.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search and return the result rows.
    ///
    /// Never fails: every failure mode resolves to an empty list.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        self.search_response(query).await.results
    }

    /// Search and return the full response envelope (results plus
    /// query-expansion suggestions).
    ///
    /// Never fails: every failure mode resolves to an empty envelope.
    pub async fn search_response(&self, query: &str) -> SearchResponse {
        match self.try_search(query).await {
            Ok(response) => {
                tracing::debug!(query, results = response.results.len(), "search completed");
                response
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "search failed, returning empty results");
                SearchResponse::default()
            }
        }
    }

    /// The fallible request path, kept internal so failure causes can be
    /// logged before the empty-on-failure collapse.
    async fn try_search(&self, query: &str) -> Result<SearchResponse, ClientError> {
        let url = build_search_url(&self.config.base_url, query, self.config.top_k);
        tracing::debug!(query, %url, "search request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Http(format!("search request failed: {e}")))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "search response");
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| ClientError::Decode(format!("search response decode failed: {e}")))
    }
}

/// Build the request URL, percent-encoding the query as a single `q`
/// parameter value.
pub(crate) fn build_search_url(base_url: &str, query: &str, top_k: usize) -> String {
    format!(
        "{}/search?q={}&top_k={top_k}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query)
    )
}
