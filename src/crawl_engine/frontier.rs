//! Thread-safe URL frontier
//!
//! The frontier owns the three pieces of shared mutable state in a crawl
//! run: the `unvisited` set, the `visited` set, and the discovery edge log.
//! A single mutex guards all three so that claiming a URL and publishing
//! newly discovered ones are atomic with respect to each other; the
//! dispatcher and the workers interact with the shared state only through
//! this type.

use indexmap::IndexSet;
use parking_lot::Mutex;

use super::crawl_types::{CrawlReport, Edge, ProgressSnapshot};

#[derive(Debug, Default)]
struct FrontierState {
    unvisited: IndexSet<String>,
    visited: IndexSet<String>,
    edges: Vec<Edge>,
}

/// Shared frontier over discovered URLs.
///
/// Invariant: a URL is a member of at most one of `visited`/`unvisited` at
/// any observation point, and once moved into `visited` it is never
/// re-added to `unvisited`. Both sets preserve insertion order so the
/// exported union is reproducible.
#[derive(Debug, Default)]
pub struct Frontier {
    state: Mutex<FrontierState>,
}

impl Frontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a URL into `unvisited` without recording an edge.
    ///
    /// Used for the sitemap phase and for seeding the crawl phase.
    /// Returns `true` if the URL was newly inserted (in neither set).
    pub fn seed(&self, url: impl Into<String>) -> bool {
        let url = url.into();
        let mut state = self.state.lock();
        if state.visited.contains(&url) {
            return false;
        }
        state.unvisited.insert(url)
    }

    /// Atomically remove the next pending URL and mark it visited.
    ///
    /// The move happens inside one critical section, so a claimed URL can
    /// never be claimed twice or re-offered by a concurrent worker.
    pub fn claim_next(&self) -> Option<String> {
        let mut state = self.state.lock();
        let url = state.unvisited.shift_remove_index(0)?;
        state.visited.insert(url.clone());
        Some(url)
    }

    /// Offer a discovered link, crediting `source` as its discoverer.
    ///
    /// Inserts into `unvisited` and appends an edge only if the link is in
    /// neither set; first discoverer wins. Returns `true` when the link was
    /// newly inserted.
    pub fn offer(&self, link: impl Into<String>, source: &str) -> bool {
        let link = link.into();
        let mut state = self.state.lock();
        if state.visited.contains(&link) || state.unvisited.contains(&link) {
            return false;
        }
        state.unvisited.insert(link.clone());
        state.edges.push(Edge::new(link, source));
        true
    }

    /// Whether no URL remains pending.
    ///
    /// Only meaningful for termination once no worker is in flight;
    /// quiescence detection is the dispatcher's job.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.state.lock().unvisited.is_empty()
    }

    #[must_use]
    pub fn counts(&self) -> ProgressSnapshot {
        let state = self.state.lock();
        ProgressSnapshot {
            visited_count: state.visited.len(),
            unvisited_count: state.unvisited.len(),
        }
    }

    /// Copies of the visited and unvisited sets, insertion order.
    #[must_use]
    pub fn snapshot(&self) -> (Vec<String>, Vec<String>) {
        let state = self.state.lock();
        (
            state.visited.iter().cloned().collect(),
            state.unvisited.iter().cloned().collect(),
        )
    }

    /// Copy of the discovery edge log in recording order.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.state.lock().edges.clone()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.state.lock().edges.len()
    }

    /// Produce the final report for this run.
    #[must_use]
    pub fn report(&self) -> CrawlReport {
        let state = self.state.lock();
        CrawlReport {
            visited: state.visited.iter().cloned().collect(),
            unvisited: state.unvisited.iter().cloned().collect(),
            edges: state.edges.clone(),
        }
    }
}
