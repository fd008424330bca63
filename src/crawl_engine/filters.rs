//! URL filtering and classification
//!
//! Three independent pure checks gate whether a discovered link is
//! scheduled: scheme validity, content validity, and the configurable
//! domain pattern match. All are deterministic for a given URL and config.

use regex::Regex;
use url::Url;

/// Extensions that mark a URL as binary/document content rather than a page
const INVALID_EXTENSIONS: [&str; 8] = [
    ".png", ".jpg", ".jpeg", ".gif", ".ppt", ".pptx", ".xls", ".xlsx",
];

/// CMS-internal path segments that never lead to crawlable content
const CMS_INTERNAL_SEGMENTS: [&str; 5] = [
    "wp-content",
    "wp-json",
    "wp-login",
    "wp-admin",
    "wp-includes",
];

/// Whether a URL can be fetched at all.
///
/// Rejects `mailto:`/`tel:` and anything not starting with
/// `http://`/`https://`.
#[must_use]
pub fn is_fetchable(url: &str) -> bool {
    if url.starts_with("mailto:") || url.starts_with("tel:") {
        return false;
    }
    url.starts_with("http://") || url.starts_with("https://")
}

/// Whether a URL points at content worth crawling.
///
/// Rejects URLs ending in a binary/document extension or containing a
/// CMS-internal path segment.
#[must_use]
pub fn is_content_url(url: &str) -> bool {
    if INVALID_EXTENSIONS.iter().any(|ext| url.ends_with(ext)) {
        return false;
    }
    !CMS_INTERNAL_SEGMENTS
        .iter()
        .any(|segment| url.contains(segment))
}

/// Strip the fragment (`#...`) from a URL.
///
/// Plain truncation rather than a parse/serialize round trip, so the URL
/// stays byte-identical up to the fragment.
#[must_use]
pub fn clean_url(url: &str) -> &str {
    url.split('#').next().unwrap_or(url)
}

/// Domain pattern filter applied before a claimed URL is fetched.
///
/// Patterns are regexes searched (not fully matched) against the URL's host
/// component. An empty rule set accepts everything.
#[derive(Debug, Clone, Default)]
pub struct DomainFilter {
    patterns: Vec<Regex>,
}

impl DomainFilter {
    #[must_use]
    pub fn new(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether the URL's host matches at least one configured pattern.
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let host = parsed.host_str().unwrap_or_default();
        self.patterns.iter().any(|pattern| pattern.is_match(host))
    }
}
