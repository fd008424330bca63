//! Crawl configuration
//!
//! `CrawlConfig` carries every input of a crawl run: the seed sitemap URL,
//! the worker count, the domain pattern filter, and the shared HTTP
//! parameters injected into both the sitemap ingester and the page fetcher.

pub mod builder;
pub mod getters;
pub mod types;

pub use builder::{
    CrawlConfigBuilder, DEFAULT_EVENT_CAPACITY, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_WORKER_COUNT, WithSitemapUrl,
};
pub use types::CrawlConfig;

/// Error raised when a configuration cannot be constructed.
///
/// Configuration errors are fatal at construction time; a crawl never
/// starts with an invalid config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The seed sitemap URL was absent or empty
    #[error("sitemap URL is required")]
    MissingSitemapUrl,

    /// The worker count was zero
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    /// A domain pattern failed to compile
    #[error("invalid domain pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
