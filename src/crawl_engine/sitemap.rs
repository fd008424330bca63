//! Sitemap expansion
//!
//! Single-threaded breadth-first reader that expands nested sitemap index
//! documents into a flat set of content URLs. The ingester runs to
//! completion before the crawl phase starts; its output seeds the shared
//! frontier.

use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::fetcher::PageFetcher;
use super::filters::{clean_url, is_content_url};
use super::frontier::Frontier;
use super::observer::CrawlObserver;

static LOC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<loc>\s*(.*?)\s*</loc>").expect("loc pattern is valid"));

/// Whether a URL names a sitemap document that should itself be expanded.
///
/// Matches any XML document whose path mentions "sitemap", which covers
/// both `sitemap.xml` indexes and split documents like `sitemap-posts.xml`.
#[must_use]
pub fn is_sitemap_url(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| {
            let path = parsed.path();
            path.contains("sitemap") && path.ends_with(".xml")
        })
        .unwrap_or(false)
}

/// Extract the `<loc>` entries of a sitemap document, keeping only
/// content-valid locations with fragments stripped.
///
/// Malformed XML degrades to however many locations the pattern finds.
fn extract_locations(xml: &str) -> Vec<String> {
    LOC_PATTERN
        .captures_iter(xml)
        .filter_map(|captures| captures.get(1))
        .map(|location| location.as_str().trim())
        .filter(|location| is_content_url(location))
        .map(|location| clean_url(location).to_string())
        .collect()
}

/// Breadth-first sitemap reader seeding the crawl phase.
pub struct SitemapIngester<'a> {
    fetcher: &'a PageFetcher,
}

impl<'a> SitemapIngester<'a> {
    #[must_use]
    pub fn new(fetcher: &'a PageFetcher) -> Self {
        Self { fetcher }
    }

    /// Expand `seed_url` and every sitemap it transitively references into
    /// the flat list of content URLs, in discovery order.
    ///
    /// Fetch and parse failures are logged and end that branch's expansion;
    /// they never abort ingestion. Termination is guaranteed because every
    /// claimed URL becomes visited and is never reprocessed, so cyclic
    /// sitemap references are consumed exactly once.
    pub async fn ingest(&self, seed_url: &str, observer: &dyn CrawlObserver) -> Vec<String> {
        let frontier = Frontier::new();
        frontier.seed(clean_url(seed_url).to_string());

        while let Some(url) = frontier.claim_next() {
            if !is_sitemap_url(&url) {
                continue;
            }

            info!(target: "sitecrawl::sitemap", "Processing sitemap: {url}");
            observer.on_status(&format!("Parsing sitemap: {url}"));

            match self.fetcher.fetch_text(&url).await {
                Ok(xml) => {
                    for location in extract_locations(&xml) {
                        frontier.seed(location);
                    }
                }
                Err(e) => {
                    error!(target: "sitecrawl::sitemap", "Failed to fetch sitemap {url}: {e}");
                }
            }
        }

        // The sitemap documents themselves are discarded; only the content
        // URLs they referenced seed the crawl phase.
        let (visited, _) = frontier.snapshot();
        visited
            .into_iter()
            .filter(|url| !is_sitemap_url(url))
            .collect()
    }
}
