//! Observer capability interface for crawl reporting
//!
//! The engine reports status, per-worker activity, progress counts, result
//! snapshots and the discovery log through this single interface; it never
//! depends on a concrete front-end. Implementations can update a UI, log to
//! the console, or republish onto an event bus.

use chrono::Local;
use log::{debug, info};

use super::crawl_types::{Edge, ProgressSnapshot, WorkerStatus};

/// Trait for observing a crawl run at its reporting points.
pub trait CrawlObserver: Send + Sync {
    /// Phase transitions and terminal status.
    fn on_status(&self, message: &str);

    /// Progress counts, emitted after each processed URL.
    fn on_progress(&self, visited_count: usize, unvisited_count: usize);

    /// Per-worker activity for the given reporting slot.
    fn on_worker_status(&self, slot: usize, status: &WorkerStatus);

    /// Periodic snapshot of the visited and unvisited sets.
    fn on_results(&self, visited: &[String], unvisited: &[String]);

    /// Incremental discovery log, emitted whenever new edges were recorded.
    fn on_edges_updated(&self, edges: &[Edge]);
}

/// Observer that does nothing.
///
/// All methods are no-ops and will be inlined away by the compiler.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl CrawlObserver for NoOpObserver {
    #[inline(always)]
    fn on_status(&self, _message: &str) {}

    #[inline(always)]
    fn on_progress(&self, _visited_count: usize, _unvisited_count: usize) {}

    #[inline(always)]
    fn on_worker_status(&self, _slot: usize, _status: &WorkerStatus) {}

    #[inline(always)]
    fn on_results(&self, _visited: &[String], _unvisited: &[String]) {}

    #[inline(always)]
    fn on_edges_updated(&self, _edges: &[Edge]) {}
}

/// Observer that renders crawl activity through the `log` facade.
///
/// Status lines mirror what an interactive front-end would display,
/// including the completion percentage against the currently known
/// frontier.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl CrawlObserver for LogObserver {
    fn on_status(&self, message: &str) {
        info!(target: "sitecrawl::status", "Status: {message}");
    }

    fn on_progress(&self, visited_count: usize, unvisited_count: usize) {
        let snapshot = ProgressSnapshot {
            visited_count,
            unvisited_count,
        };
        let now = Local::now().format("%d-%m-%Y %H:%M:%S");
        info!(
            target: "sitecrawl::status",
            "Crawling links {}% completed as of {now} ({visited_count}/{})",
            snapshot.completion_percent(),
            visited_count + unvisited_count,
        );
    }

    fn on_worker_status(&self, slot: usize, status: &WorkerStatus) {
        debug!(target: "sitecrawl::workers", "Worker {}: {status}", slot + 1);
    }

    fn on_results(&self, visited: &[String], unvisited: &[String]) {
        debug!(
            target: "sitecrawl::status",
            "Snapshot: {} visited, {} unvisited",
            visited.len(),
            unvisited.len(),
        );
    }

    fn on_edges_updated(&self, edges: &[Edge]) {
        debug!(target: "sitecrawl::status", "{} edges recorded", edges.len());
    }
}
