//! Getter methods for `CrawlConfig`

use super::types::CrawlConfig;

impl CrawlConfig {
    #[must_use]
    pub fn sitemap_url(&self) -> &str {
        &self.sitemap_url
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    #[must_use]
    pub fn domain_patterns(&self) -> &[String] {
        &self.domain_patterns
    }

    #[must_use]
    pub fn domain_patterns_compiled(&self) -> &[regex::Regex] {
        &self.domain_patterns_compiled
    }

    #[must_use]
    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    #[must_use]
    pub fn event_capacity(&self) -> usize {
        self.event_capacity
    }
}
