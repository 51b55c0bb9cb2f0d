//! Wire types for the HyperSerp search API.
//!
//! The backend returns JSON shaped `{ "query": …, "expansions": […],
//! "results": […] }`. Every field is optional on the wire: older backends
//! omit fields, newer ones send explicit nulls. Consumers must not assume
//! presence of any result field.

use serde::{Deserialize, Serialize};

/// A single search result row.
///
/// All fields are optional. A result has no identity beyond its position in
/// the response array; `id` and `score` are backend bookkeeping and are not
/// used for ordering on the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    /// Backend document id (opaque).
    pub id: Option<String>,
    /// Page title.
    pub title: Option<String>,
    /// Page URL.
    pub url: Option<String>,
    /// Short text snippet from the page.
    pub snippet: Option<String>,
    /// LLM-generated summary, present only for the top few results.
    pub summary: Option<String>,
    /// LLM-classified topic label.
    pub topic: Option<String>,
    /// Backend relevance score. Informational only.
    pub score: Option<f64>,
}

/// Response envelope for `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    /// The query as the backend saw it.
    pub query: Option<String>,
    /// Query-expansion suggestions ("did you mean…").
    pub expansions: Vec<String>,
    /// Result rows, already ordered by the backend.
    pub results: Vec<SearchResult>,
}
