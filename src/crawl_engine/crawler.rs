//! Two-phase crawl orchestration
//!
//! Phase one expands the seed sitemap into a flat set of content URLs;
//! phase two drains those URLs concurrently, following hyperlinks until the
//! frontier is quiescent. The observer receives every phase transition.

use log::info;
use std::sync::Arc;

use super::crawl_types::{CrawlError, CrawlReport};
use super::dispatcher::Dispatcher;
use super::fetcher::PageFetcher;
use super::filters::DomainFilter;
use super::frontier::Frontier;
use super::observer::CrawlObserver;
use super::sitemap::SitemapIngester;
use crate::config::CrawlConfig;

/// Sitemap-seeded website crawler.
pub struct SitemapCrawler {
    config: CrawlConfig,
    fetcher: Arc<PageFetcher>,
    filter: Arc<DomainFilter>,
}

impl SitemapCrawler {
    /// Create a crawler from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `CrawlError::Client` if the shared HTTP client cannot be
    /// built.
    pub fn new(config: CrawlConfig) -> Result<Self, CrawlError> {
        let fetcher = PageFetcher::new(&config)?;
        let filter = DomainFilter::new(config.domain_patterns_compiled().to_vec());
        Ok(Self {
            config,
            fetcher: Arc::new(fetcher),
            filter: Arc::new(filter),
        })
    }

    /// Run both crawl phases to completion and return the final report.
    ///
    /// The run always reaches a terminal state: fetch failures only stop
    /// individual branches, and the dispatcher exits on quiescence. Even if
    /// every fetch failed, the report holds the sitemap-derived seed set
    /// with no further expansion.
    pub async fn run(&self, observer: Arc<dyn CrawlObserver>) -> CrawlReport {
        info!(target: "sitecrawl::crawler", "Starting sitemap parsing");
        observer.on_status("Starting sitemap parsing...");

        let ingester = SitemapIngester::new(&self.fetcher);
        let content_urls = ingester
            .ingest(self.config.sitemap_url(), observer.as_ref())
            .await;

        // The ingestion working set is discarded; the discovered content
        // URLs become the crawl phase's initial unvisited set.
        observer.on_status("Resetting counts...");
        let frontier = Arc::new(Frontier::new());
        for url in content_urls {
            frontier.seed(url);
        }
        let counts = frontier.counts();
        observer.on_progress(0, counts.unvisited_count);
        info!(
            target: "sitecrawl::crawler",
            "Sitemap expansion produced {} content URLs",
            counts.unvisited_count,
        );

        observer.on_status("Crawling links...");
        let dispatcher = Dispatcher::new(
            Arc::clone(&frontier),
            Arc::clone(&self.fetcher),
            Arc::clone(&self.filter),
            self.config.worker_count(),
        );
        dispatcher.run(Arc::clone(&observer)).await;
        observer.on_status("Crawling complete!");

        let report = frontier.report();
        observer.on_results(&report.visited, &report.unvisited);
        observer.on_edges_updated(&report.edges);
        info!(
            target: "sitecrawl::crawler",
            "Crawl complete: {} visited, {} edges recorded",
            report.visited.len(),
            report.edges.len(),
        );
        report
    }
}
