//! Type-safe builder for `CrawlConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time
//! validation ensuring that the required sitemap URL is set before building
//! a `CrawlConfig`.

use regex::Regex;
use std::marker::PhantomData;

use super::ConfigError;
use super::types::CrawlConfig;

/// Default number of concurrent crawl workers
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default event bus buffer capacity
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

// Type state marking that the required sitemap URL has been provided
pub struct WithSitemapUrl;

pub struct CrawlConfigBuilder<State = ()> {
    pub(crate) sitemap_url: Option<String>,
    pub(crate) worker_count: usize,
    pub(crate) domain_patterns: Vec<String>,
    pub(crate) request_timeout_secs: u64,
    pub(crate) event_capacity: usize,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for CrawlConfigBuilder<()> {
    fn default() -> Self {
        Self {
            sitemap_url: None,
            worker_count: DEFAULT_WORKER_COUNT,
            domain_patterns: Vec::new(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            _phantom: PhantomData,
        }
    }
}

impl CrawlConfigBuilder<()> {
    /// Set the seed sitemap URL, unlocking `build()`.
    #[must_use]
    pub fn sitemap_url(self, url: impl Into<String>) -> CrawlConfigBuilder<WithSitemapUrl> {
        CrawlConfigBuilder {
            sitemap_url: Some(url.into()),
            worker_count: self.worker_count,
            domain_patterns: self.domain_patterns,
            request_timeout_secs: self.request_timeout_secs,
            event_capacity: self.event_capacity,
            _phantom: PhantomData,
        }
    }
}

impl<State> CrawlConfigBuilder<State> {
    /// Set the number of concurrent workers draining the frontier.
    #[must_use]
    pub fn worker_count(mut self, count: usize) -> Self {
        self.worker_count = count;
        self
    }

    /// Replace the full list of domain patterns.
    #[must_use]
    pub fn domain_patterns(mut self, patterns: Vec<String>) -> Self {
        self.domain_patterns = patterns;
        self
    }

    /// Append a single domain pattern.
    #[must_use]
    pub fn domain_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.domain_patterns.push(pattern.into());
        self
    }

    /// Set the per-request HTTP timeout in seconds.
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Set the event bus buffer capacity.
    #[must_use]
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }
}

impl CrawlConfigBuilder<WithSitemapUrl> {
    /// Validate the collected parameters and produce a `CrawlConfig`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the sitemap URL is empty, the worker count
    /// is zero, or any domain pattern fails to compile as a regex.
    pub fn build(self) -> Result<CrawlConfig, ConfigError> {
        let sitemap_url = self
            .sitemap_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingSitemapUrl)?;

        if self.worker_count == 0 {
            return Err(ConfigError::InvalidWorkerCount);
        }

        let domain_patterns_compiled = self
            .domain_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CrawlConfig {
            sitemap_url,
            worker_count: self.worker_count,
            domain_patterns: self.domain_patterns,
            domain_patterns_compiled,
            request_timeout_secs: self.request_timeout_secs,
            event_capacity: self.event_capacity,
        })
    }
}
