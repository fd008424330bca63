//! sitecrawl: sitemap-seeded website crawler
//!
//! The engine expands a seed sitemap (nested indexes included) into a flat
//! set of content URLs, then drains that frontier with a bounded pool of
//! concurrent workers, following hyperlinks, deduplicating URLs, and
//! recording which link was first discovered on which page. The result is
//! a deduplicated URL corpus plus a discovery provenance log.
//!
//! ```no_run
//! use std::sync::Arc;
//! use sitecrawl::{CrawlConfig, LogObserver, SitemapCrawler};
//!
//! # async fn run() -> Result<(), sitecrawl::CrawlError> {
//! let config = CrawlConfig::builder()
//!     .sitemap_url("https://example.com/sitemap.xml")
//!     .worker_count(8)
//!     .domain_pattern(r"example\.com")
//!     .build()?;
//!
//! let crawler = SitemapCrawler::new(config)?;
//! let report = crawler.run(Arc::new(LogObserver)).await;
//! println!("{} unique links", report.unique_links().len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod crawl_engine;
pub mod crawl_events;
pub mod export;

pub use config::{ConfigError, CrawlConfig, CrawlConfigBuilder};
pub use crawl_engine::{
    CrawlError, CrawlObserver, CrawlReport, DomainFilter, Edge, FetchError, Frontier, LogObserver,
    NoOpObserver, PageFetcher, ProgressSnapshot, SitemapCrawler, SitemapIngester, WorkerStatus,
};
pub use crawl_events::{CrawlEvent, CrawlEventBus, EventBusError, EventBusObserver, ShutdownReason};

use std::sync::Arc;

/// Run a full two-phase crawl with the given configuration, without
/// observation.
///
/// # Errors
///
/// Returns `CrawlError` if the HTTP client cannot be built; fetch failures
/// during the run never surface as errors.
pub async fn crawl(config: CrawlConfig) -> Result<CrawlReport, CrawlError> {
    crawl_with_observer(config, Arc::new(NoOpObserver)).await
}

/// Run a full two-phase crawl, reporting through the given observer.
///
/// # Errors
///
/// Returns `CrawlError` if the HTTP client cannot be built.
pub async fn crawl_with_observer(
    config: CrawlConfig,
    observer: Arc<dyn CrawlObserver>,
) -> Result<CrawlReport, CrawlError> {
    let crawler = SitemapCrawler::new(config)?;
    Ok(crawler.run(observer).await)
}
