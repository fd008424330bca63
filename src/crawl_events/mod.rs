//! Crawl event system
//!
//! Broadcast-based event plumbing for front-ends that want to watch a
//! crawl (status lines, progress counters, per-worker activity, result
//! snapshots, the discovery log) without being wired into the engine.

pub mod bus;
pub mod errors;
pub mod observer;
pub mod types;

pub use bus::CrawlEventBus;
pub use errors::EventBusError;
pub use observer::EventBusObserver;
pub use types::{CrawlEvent, ShutdownReason};
