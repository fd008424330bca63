//! Crawl Engine Module
//!
//! This module contains the core crawling engine: the shared URL frontier,
//! the sitemap ingester, URL filtering, page fetching, the concurrent
//! worker dispatcher, and the two-phase orchestration that ties them
//! together.

// Sub-modules
pub mod crawl_types;
pub mod crawler;
pub mod dispatcher;
pub mod fetcher;
pub mod filters;
pub mod frontier;
pub mod observer;
pub mod sitemap;

// Re-exports for public API
pub use crawl_types::{
    CrawlError, CrawlReport, Edge, FetchError, ProgressSnapshot, WorkerStatus,
};
pub use crawler::SitemapCrawler;
pub use fetcher::{PageFetcher, USER_AGENT_VALUE};
pub use filters::{DomainFilter, clean_url, is_content_url, is_fetchable};
pub use frontier::Frontier;
pub use observer::{CrawlObserver, LogObserver, NoOpObserver};
pub use sitemap::{SitemapIngester, is_sitemap_url};
