//! Async bridge between the event loop and the search client.
//!
//! Each submitted search runs on its own tokio task; the outcome comes back
//! over an mpsc channel that the event loop drains with a non-blocking
//! [`SearchDispatcher::poll`] every tick. The UI thread never waits on the
//! network — the user can keep editing the query or press Escape while a
//! search is in flight. In-flight requests are never aborted; superseded
//! outcomes are filtered by sequence number at the state layer.

use hyperserp_client::SearchClient;
use std::sync::Arc;
use tokio::sync::mpsc;

use super::state::SearchRequest;

/// A finished search, tagged with the sequence number it was issued under.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Sequence number of the originating [`SearchRequest`].
    pub seq: u64,
    /// Result rows (empty on failure — the client never errors).
    pub results: Vec<hyperserp_client::SearchResult>,
    /// Query-expansion suggestions.
    pub expansions: Vec<String>,
}

/// Dispatches searches to background tasks and collects their outcomes.
pub struct SearchDispatcher {
    client: Arc<SearchClient>,
    tx: mpsc::Sender<SearchOutcome>,
    rx: mpsc::Receiver<SearchOutcome>,
}

impl SearchDispatcher {
    /// Channel capacity: overlapping searches are rare, completed outcomes
    /// are drained every tick.
    const CHANNEL_CAPACITY: usize = 16;

    /// Create a dispatcher around a search client.
    #[must_use]
    pub fn new(client: SearchClient) -> Self {
        let (tx, rx) = mpsc::channel(Self::CHANNEL_CAPACITY);
        Self {
            client: Arc::new(client),
            tx,
            rx,
        }
    }

    /// Start a search on a background task.
    ///
    /// The outcome arrives via [`poll`](Self::poll). Send failures (the
    /// receiver is gone during shutdown) are ignored.
    pub fn dispatch(&self, request: SearchRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let response = client.search_response(&request.query).await;
            let outcome = SearchOutcome {
                seq: request.seq,
                results: response.results,
                expansions: response.expansions,
            };
            let _ = tx.send(outcome).await;
        });
    }

    /// Take the next finished search, if any (non-blocking).
    pub fn poll(&mut self) -> Option<SearchOutcome> {
        self.rx.try_recv().ok()
    }
}
