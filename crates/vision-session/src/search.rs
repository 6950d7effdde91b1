//! # Product Search
//!
//! Debounced search-as-you-type for the register's suggestion box.
//!
//! ## Query Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Last Query Wins                                     │
//! │                                                                         │
//! │  keystroke ──► query("su")   gen=1  ──► sleep 300ms ─────┐              │
//! │  keystroke ──► query("sug")  gen=2  ──► sleep 300ms ──┐  │              │
//! │                                                       │  │              │
//! │                                      gen check ◄──────┼──┘              │
//! │                                      1 ≠ 2 → Superseded                 │
//! │                                                       │                 │
//! │                                      gen check ◄──────┘                 │
//! │                                      2 = 2 → request ──► gen check      │
//! │                                                          2 = 2 → Hits   │
//! │                                                                         │
//! │  The generation is checked twice: after the debounce sleep and again    │
//! │  after the response. A stale request never fills the suggestion box,    │
//! │  and a stale FAILURE never surfaces either.                             │
//! │                                                                         │
//! │  Routing: 1-3 digit input is a product code (zero-padded id lookup),    │
//! │  anything else is a name search.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use vision_api::CatalogService;
use vision_core::validation::{is_product_code, normalize_product_id, validate_search_query};
use vision_core::Product;

use crate::error::SessionResult;

/// How long input must stay unchanged before a query is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Result of one search call.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// A newer query was issued while this one was waiting or in flight.
    /// The caller ignores this outcome; the newer query owns the UI.
    Superseded,

    /// Suggestions for the latest query. May be empty.
    Hits(Vec<Product>),
}

// =============================================================================
// Product Search
// =============================================================================

/// Debounced product search with last-query-wins semantics.
///
/// One instance backs one suggestion box. Calls race freely: every call
/// bumps the generation counter, and only the call holding the newest
/// generation reports hits (or a failure). Everyone else reports
/// [`SearchOutcome::Superseded`].
pub struct ProductSearch {
    service: Arc<dyn CatalogService>,
    debounce: Duration,
    generation: AtomicU64,
}

impl ProductSearch {
    /// Creates a search box with the standard 300ms debounce.
    pub fn new(service: Arc<dyn CatalogService>) -> Self {
        ProductSearch {
            service,
            debounce: DEFAULT_DEBOUNCE,
            generation: AtomicU64::new(0),
        }
    }

    /// Overrides the debounce window.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Runs one keystroke's worth of search.
    ///
    /// ## Behavior
    /// - Empty input resolves immediately with no hits and no debounce,
    ///   and supersedes any query still in flight.
    /// - 1-3 digit input is zero-padded and looked up as a product id;
    ///   an unknown id is empty hits, not an error.
    /// - Anything else goes to the name search endpoint.
    /// - A query superseded at any point reports `Superseded`, even if its
    ///   request failed.
    pub async fn query(&self, input: &str) -> SessionResult<SearchOutcome> {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let query = validate_search_query(input)?;
        if query.is_empty() {
            return Ok(SearchOutcome::Hits(Vec::new()));
        }

        sleep(self.debounce).await;
        if self.generation.load(Ordering::SeqCst) != my_generation {
            debug!(query = %query, "Search superseded during debounce");
            return Ok(SearchOutcome::Superseded);
        }

        let result = if is_product_code(&query) {
            let id = normalize_product_id(&query)?;
            debug!(query = %query, id = %id, "Searching by product code");
            match self.service.product(&id).await {
                Err(err) if err.is_not_found() => Ok(Vec::new()),
                other => other,
            }
        } else {
            debug!(query = %query, "Searching by name");
            self.service.search(&query).await
        };

        // The stale check comes before error propagation: an overtaken
        // query's failure belongs to a question nobody is asking anymore.
        if self.generation.load(Ordering::SeqCst) != my_generation {
            debug!(query = %query, "Search superseded in flight");
            return Ok(SearchOutcome::Superseded);
        }

        Ok(SearchOutcome::Hits(result?))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
