//! Debounced place search.
//!
//! Keystrokes arrive faster than the geocoding service should be called.
//! The gate fires only after the query has been quiet for the configured
//! window; a newer keystroke aborts the pending fire. Responses carry a
//! generation tag and are discarded when a newer query has superseded them
//! in the meantime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use waymark_core::{GeocodingClient, SearchResult};

/// Queries shorter than this never reach the geocoding client.
pub const MIN_QUERY_LEN: usize = 3;

#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<SearchResult>,
    /// Last chosen candidate; replaced, never accumulated.
    pub selected_area: Option<SearchResult>,
}

pub struct SearchSession<G: GeocodingClient + 'static> {
    client: Arc<G>,
    state: Arc<Mutex<SearchState>>,
    quiescence: Duration,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl<G: GeocodingClient + 'static> SearchSession<G> {
    pub fn new(client: G, quiescence: Duration) -> Self {
        Self {
            client: Arc::new(client),
            state: Arc::new(Mutex::new(SearchState::default())),
            quiescence,
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// Record a keystroke. Cancels any pending fire; short queries clear
    /// the result list immediately without calling the client.
    pub fn set_query(&mut self, query: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let too_short = query.chars().count() < MIN_QUERY_LEN;
        if let Ok(mut state) = self.state.lock() {
            state.query = query.to_string();
            if too_short {
                state.results.clear();
            }
        }
        if too_short {
            return;
        }

        let client = Arc::clone(&self.client);
        let state = Arc::clone(&self.state);
        let generation_counter = Arc::clone(&self.generation);
        let quiescence = self.quiescence;
        let query = query.to_string();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiescence).await;
            let results = match client.search(&query).await {
                Ok(results) => results,
                Err(err) => {
                    tracing::warn!(error = %err, query = %query, "place search failed");
                    Vec::new()
                }
            };
            if !apply_results(&state, &generation_counter, generation, results) {
                tracing::debug!(query = %query, "discarded stale search response");
            }
        }));
    }

    /// Wait for a pending fire (if any) to finish or be aborted.
    pub async fn settle(&mut self) {
        if let Some(pending) = self.pending.take() {
            let _ = pending.await;
        }
    }

    /// Record the chosen candidate and clear the candidate list.
    pub fn select_area(&mut self, area: SearchResult) {
        if let Ok(mut state) = self.state.lock() {
            state.selected_area = Some(area);
            state.results.clear();
        }
    }

    pub fn results(&self) -> Vec<SearchResult> {
        self.state
            .lock()
            .map(|state| state.results.clone())
            .unwrap_or_default()
    }

    pub fn selected_area(&self) -> Option<SearchResult> {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.selected_area.clone())
    }

    pub fn query(&self) -> String {
        self.state
            .lock()
            .map(|state| state.query.clone())
            .unwrap_or_default()
    }
}

/// Apply a completed search only if its generation is still current.
fn apply_results(
    state: &Mutex<SearchState>,
    generation_counter: &AtomicU64,
    generation: u64,
    results: Vec<SearchResult>,
) -> bool {
    if generation_counter.load(Ordering::SeqCst) != generation {
        return false;
    }
    match state.lock() {
        Ok(mut state) => {
            state.results = results;
            true
        }
        Err(_) => false,
    }
}
