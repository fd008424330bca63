//! Core types for crawl operations
//!
//! This module contains the fundamental types used throughout the crawler:
//! error types, the discovery edge record, worker status reporting, and the
//! final crawl report.

use serde::{Deserialize, Serialize};
use std::fmt;

use indexmap::IndexSet;

/// Top-level error for crawl runs
#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    /// Configuration error, fatal at construction time
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The shared HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Error from a single HTTP fetch
///
/// Fetch errors never abort the run; they are caught at the fetcher and
/// ingester boundaries and degrade to "zero outbound links from this URL".
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// DNS, connect, timeout or body-read failure
    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response status
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },
}

/// A provenance record: `link` was first discovered on `source`.
///
/// Edges are append-only; one entry is recorded per unique newly-discovered
/// URL (first discoverer wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub link: String,
    pub source: String,
}

impl Edge {
    #[must_use]
    pub fn new(link: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            source: source.into(),
        }
    }
}

/// Per-worker activity, reported to the observer as display text.
///
/// The slot index attached to these updates is a round-robin label for
/// reporting only; it carries no concurrency-control meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerStatus {
    Idle,
    Visiting(String),
    Skipping(String),
    Finished(String),
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Visiting(url) => write!(f, "Visiting {url}"),
            Self::Skipping(url) => write!(f, "Skipping {url}"),
            Self::Finished(url) => write!(f, "Finished {url}"),
        }
    }
}

/// Progress counts read at an arbitrary point during a crawl.
///
/// Used for reporting only, never for control decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub visited_count: usize,
    pub unvisited_count: usize,
}

impl ProgressSnapshot {
    /// Completion percentage against the currently known frontier,
    /// rounded to two decimals.
    ///
    /// The denominator excludes URLs never discovered, so this reflects
    /// progress against known work, not a true final total. Defined as 0.0
    /// when nothing has been discovered yet.
    #[must_use]
    pub fn completion_percent(&self) -> f64 {
        let total = self.visited_count + self.unvisited_count;
        if total == 0 {
            return 0.0;
        }
        let percent = (self.visited_count as f64 / total as f64) * 100.0;
        (percent * 100.0).round() / 100.0
    }
}

/// Final outcome of a crawl run: the URL sets in insertion order plus the
/// discovery edge log. Owned by the run; handed to export at termination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlReport {
    pub visited: Vec<String>,
    pub unvisited: Vec<String>,
    pub edges: Vec<Edge>,
}

impl CrawlReport {
    /// Deduplicated union of the visited and unvisited sets, insertion order.
    #[must_use]
    pub fn unique_links(&self) -> Vec<String> {
        let mut union: IndexSet<String> = IndexSet::new();
        union.extend(self.visited.iter().cloned());
        union.extend(self.unvisited.iter().cloned());
        union.into_iter().collect()
    }

    #[must_use]
    pub fn progress(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            visited_count: self.visited.len(),
            unvisited_count: self.unvisited.len(),
        }
    }
}
