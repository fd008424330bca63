//! Event type definitions for the crawl event system
//!
//! Each event carries a timestamp so subscribers can reconstruct the run's
//! timeline without coordinating clocks with the engine.

use serde::{Deserialize, Serialize};

use crate::crawl_engine::{Edge, WorkerStatus};

/// Reason for event bus shutdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShutdownReason {
    /// Crawl completed successfully
    CrawlCompleted,
    /// Crawl encountered an error
    Error(String),
    /// Crawl was cancelled by user
    Cancelled,
}

/// Event types emitted during the crawl process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CrawlEvent {
    /// Phase transition or terminal status message
    StatusChanged {
        message: String,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// Progress counts after a processed URL
    ProgressUpdated {
        visited_count: usize,
        unvisited_count: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// Per-worker activity for a reporting slot
    WorkerStatusChanged {
        slot: usize,
        status: WorkerStatus,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// Periodic snapshot of the URL sets
    ResultsSnapshot {
        visited: Vec<String>,
        unvisited: Vec<String>,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// Incremental discovery log
    EdgesUpdated {
        edges: Vec<Edge>,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// Signals that the event bus is shutting down
    ///
    /// Subscribers should exit their event loops when receiving this event.
    Shutdown {
        reason: ShutdownReason,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

/// Helper functions for creating common events
impl CrawlEvent {
    /// Create a `StatusChanged` event
    #[must_use]
    pub fn status_changed(message: impl Into<String>) -> Self {
        Self::StatusChanged {
            message: message.into(),
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create a `ProgressUpdated` event
    #[must_use]
    pub fn progress_updated(visited_count: usize, unvisited_count: usize) -> Self {
        Self::ProgressUpdated {
            visited_count,
            unvisited_count,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create a `WorkerStatusChanged` event
    #[must_use]
    pub fn worker_status_changed(slot: usize, status: WorkerStatus) -> Self {
        Self::WorkerStatusChanged {
            slot,
            status,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create a `ResultsSnapshot` event
    #[must_use]
    pub fn results_snapshot(visited: Vec<String>, unvisited: Vec<String>) -> Self {
        Self::ResultsSnapshot {
            visited,
            unvisited,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create an `EdgesUpdated` event
    #[must_use]
    pub fn edges_updated(edges: Vec<Edge>) -> Self {
        Self::EdgesUpdated {
            edges,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create a `Shutdown` event
    #[must_use]
    pub fn shutdown(reason: ShutdownReason) -> Self {
        Self::Shutdown {
            reason,
            timestamp: chrono::Utc::now(),
        }
    }
}
