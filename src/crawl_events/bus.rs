//! Event bus for publishing and subscribing to crawl events
//!
//! A thin wrapper around `tokio::sync::broadcast` with best-effort
//! delivery: publishing with no subscribers is an error the caller may
//! ignore, and a shut-down bus rejects further publishes.

use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::broadcast;

use super::errors::EventBusError;
use super::types::{CrawlEvent, ShutdownReason};

/// Event bus for publishing and subscribing to crawl events
#[derive(Debug)]
pub struct CrawlEventBus {
    sender: broadcast::Sender<CrawlEvent>,
    shutdown_flag: Arc<AtomicBool>,
}

impl CrawlEventBus {
    /// Create a new event bus with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            shutdown_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Subscribe to crawl events.
    ///
    /// A slow receiver that falls more than the bus capacity behind will
    /// observe `RecvError::Lagged` and miss the overwritten events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CrawlEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers.
    ///
    /// # Errors
    ///
    /// Returns `EventBusError::Shutdown` after `shutdown()` was called and
    /// `EventBusError::NoSubscribers` when nobody is listening.
    pub fn publish(&self, event: CrawlEvent) -> Result<usize, EventBusError> {
        if self.shutdown_flag.load(Ordering::Acquire) {
            return Err(EventBusError::Shutdown);
        }
        self.sender
            .send(event)
            .map_err(|_| EventBusError::NoSubscribers)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    #[must_use]
    pub fn has_subscribers(&self) -> bool {
        self.subscriber_count() > 0
    }

    /// Publish a final `Shutdown` event (best effort) and reject all
    /// subsequent publishes.
    pub fn shutdown(&self, reason: ShutdownReason) {
        if let Err(e) = self.publish(CrawlEvent::shutdown(reason)) {
            debug!(target: "sitecrawl::events", "Shutdown event not delivered: {e}");
        }
        self.shutdown_flag.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        self.shutdown_flag.load(Ordering::Acquire)
    }
}
