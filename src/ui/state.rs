//! Search view state and its derived display state.
//!
//! [`SearchViewState`] owns everything the view needs: the query text, the
//! last result set, and the loading / has-searched flags. What is actually
//! on screen is derived by [`SearchViewState::display_state`] — a pure
//! function of the flags and the result count — so no impossible
//! combination can be stored.
//!
//! Overlapping searches are resolved with request sequence numbers: each
//! submission gets the next number, and only the completion matching the
//! most recently issued number is applied. A stale response from an earlier
//! search is dropped, so the last *issued* search wins under rapid
//! re-querying. The stale request itself is never aborted.

use hyperserp_client::SearchResult;

/// A search accepted for dispatch: the sequence number and trimmed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Sequence number identifying this submission.
    pub seq: u64,
    /// The trimmed, non-empty query text.
    pub query: String,
}

/// What the result area is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// No search submitted yet: centered hero input, no result area.
    Landing,
    /// A search is in flight: skeleton placeholder rows.
    Loading,
    /// Last search finished with zero results.
    Empty,
    /// Last search finished with at least one result.
    Populated,
}

/// Derive the display state from the raw flags.
///
/// `Landing` while nothing has been searched, `Loading` while a request is
/// in flight, then `Empty` or `Populated` by result count.
#[must_use]
pub fn display_state(loading: bool, has_searched: bool, result_count: usize) -> DisplayState {
    if !has_searched {
        DisplayState::Landing
    } else if loading {
        DisplayState::Loading
    } else if result_count == 0 {
        DisplayState::Empty
    } else {
        DisplayState::Populated
    }
}

/// UI state owned by the search view.
///
/// Mutated only by the event loop's handlers; reset only by process restart.
#[derive(Debug, Clone, Default)]
pub struct SearchViewState {
    query: String,
    results: Vec<SearchResult>,
    expansions: Vec<String>,
    loading: bool,
    has_searched: bool,
    next_seq: u64,
    active_seq: Option<u64>,
}

impl SearchViewState {
    /// Create an empty landing-state view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results of the last completed search.
    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Query-expansion suggestions from the last completed search.
    #[must_use]
    pub fn expansions(&self) -> &[String] {
        &self.expansions
    }

    /// Whether a search is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether at least one search has been submitted this session.
    /// Monotonic: never returns to `false` once set.
    #[must_use]
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    /// The derived visual state.
    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        display_state(self.loading, self.has_searched, self.results.len())
    }

    /// Append a character to the query.
    pub fn insert_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Delete the last character of the query.
    pub fn backspace(&mut self) {
        self.query.pop();
    }

    /// Escape behaviour: clear the query text.
    ///
    /// Leaves `results`, `expansions`, and `has_searched` untouched — a
    /// previously rendered result list stays visible.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Submit the current query.
    ///
    /// With a non-blank trimmed query this sets `loading` and
    /// `has_searched`, assigns the next sequence number, and returns the
    /// request to dispatch. A blank or whitespace-only query is a no-op
    /// and returns `None`.
    pub fn submit(&mut self) -> Option<SearchRequest> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.next_seq += 1;
        let seq = self.next_seq;
        self.active_seq = Some(seq);
        self.loading = true;
        self.has_searched = true;
        tracing::debug!(seq, query = trimmed, "search submitted");
        Some(SearchRequest {
            seq,
            query: trimmed.to_string(),
        })
    }

    /// Apply a completed search.
    ///
    /// Returns `true` when the completion matched the most recently issued
    /// sequence number and was applied. A completion from a superseded
    /// search is dropped and returns `false`.
    pub fn complete(
        &mut self,
        seq: u64,
        results: Vec<SearchResult>,
        expansions: Vec<String>,
    ) -> bool {
        if self.active_seq != Some(seq) {
            tracing::debug!(seq, "stale search completion dropped");
            return false;
        }
        self.active_seq = None;
        self.loading = false;
        self.results = results;
        self.expansions = expansions;
        true
    }
}
