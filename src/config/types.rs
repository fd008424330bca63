//! Core configuration types for crawl runs
//!
//! This module contains the main `CrawlConfig` struct that defines the
//! parameters for a sitemap-seeded crawl.

use serde::{Deserialize, Serialize};

/// Main configuration struct for a crawl run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Seed sitemap URL the ingestion phase starts from.
    ///
    /// **INVARIANT:** Always non-empty (validated in the builder). The crawl
    /// must not start without a seed.
    pub(crate) sitemap_url: String,

    /// Number of concurrent workers draining the frontier.
    ///
    /// **INVARIANT:** Always at least 1 (validated in the builder).
    pub(crate) worker_count: usize,

    /// Regex patterns matched against a URL's host component.
    ///
    /// An empty list accepts every host. A non-empty list requires at least
    /// one pattern to match (regex search, not full match) before a URL is
    /// fetched; unmatched URLs are consumed but contribute nothing.
    pub(crate) domain_patterns: Vec<String>,

    /// Compiled regexes from `domain_patterns`.
    /// Pre-compiled at config creation to avoid hot-path regex compilation.
    #[serde(skip)]
    pub(crate) domain_patterns_compiled: Vec<regex::Regex>,

    /// Timeout in seconds applied to every HTTP request.
    ///
    /// A wedged fetch would otherwise block its worker slot until
    /// transport-level defaults give up.
    ///
    /// Default: 30 seconds
    pub(crate) request_timeout_secs: u64,

    /// Buffer capacity of the crawl event bus.
    ///
    /// Default: 256 events
    pub(crate) event_capacity: usize,
}

impl CrawlConfig {
    /// Start building a configuration.
    ///
    /// The builder enforces at compile time that a sitemap URL is provided
    /// before `build()` becomes available.
    #[must_use]
    pub fn builder() -> super::builder::CrawlConfigBuilder<()> {
        super::builder::CrawlConfigBuilder::default()
    }
}
