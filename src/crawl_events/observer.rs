//! Bridge from the engine's observer interface onto the event bus
//!
//! Lets any number of bus subscribers watch a crawl without the engine
//! knowing about them. Delivery is best effort: publish failures (no
//! subscribers yet, bus shut down) are logged at debug level and never
//! affect the crawl.

use log::debug;
use std::sync::Arc;

use super::bus::CrawlEventBus;
use super::types::CrawlEvent;
use crate::crawl_engine::{CrawlObserver, Edge, WorkerStatus};

/// Observer publishing every reporting call as a `CrawlEvent`.
#[derive(Debug, Clone)]
pub struct EventBusObserver {
    bus: Arc<CrawlEventBus>,
}

impl EventBusObserver {
    #[must_use]
    pub fn new(bus: Arc<CrawlEventBus>) -> Self {
        Self { bus }
    }

    #[must_use]
    pub fn bus(&self) -> &Arc<CrawlEventBus> {
        &self.bus
    }

    fn publish(&self, event: CrawlEvent) {
        if let Err(e) = self.bus.publish(event) {
            debug!(target: "sitecrawl::events", "Event not delivered: {e}");
        }
    }
}

impl CrawlObserver for EventBusObserver {
    fn on_status(&self, message: &str) {
        self.publish(CrawlEvent::status_changed(message));
    }

    fn on_progress(&self, visited_count: usize, unvisited_count: usize) {
        self.publish(CrawlEvent::progress_updated(visited_count, unvisited_count));
    }

    fn on_worker_status(&self, slot: usize, status: &WorkerStatus) {
        self.publish(CrawlEvent::worker_status_changed(slot, status.clone()));
    }

    fn on_results(&self, visited: &[String], unvisited: &[String]) {
        self.publish(CrawlEvent::results_snapshot(
            visited.to_vec(),
            unvisited.to_vec(),
        ));
    }

    fn on_edges_updated(&self, edges: &[Edge]) {
        self.publish(CrawlEvent::edges_updated(edges.to_vec()));
    }
}
