//! HTTP fetching and outbound link extraction
//!
//! One `reqwest::Client` is shared by the sitemap ingester and the crawl
//! workers, carrying the desktop-browser header set and the configured
//! request timeout. Transport and status failures are reported through
//! `FetchError` for callers that need them (the ingester) and degrade to an
//! empty link set for callers that don't (the workers).

use log::{debug, warn};
use once_cell::sync::Lazy;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue, USER_AGENT};
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

use super::crawl_types::FetchError;
use crate::config::CrawlConfig;

/// Desktop-browser user agent shared by every request
pub const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    // Accept-Encoding (gzip, deflate) is added by reqwest, which also
    // decompresses transparently.
    headers
}

/// HTTP client wrapper issuing one GET per URL.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Build the shared client from the crawl configuration.
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest` error if the client cannot be
    /// constructed.
    pub fn new(config: &CrawlConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .default_headers(default_headers())
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a URL and return the response body as text.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Transport` for connection-level failures and
    /// `FetchError::Status` for non-2xx responses.
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch a page and return every absolute URL resolved from its anchor
    /// `href` attributes.
    ///
    /// Relative references are resolved against the response URL (after
    /// redirects). Any transport or status failure is logged and yields an
    /// empty link set; the URL stays visited and simply contributes nothing
    /// further to the frontier.
    pub async fn fetch_links(&self, url: &str) -> Vec<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(target: "sitecrawl::fetch", "Error fetching {url}: {e}");
                return Vec::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(target: "sitecrawl::fetch", "HTTP status {status} for {url}");
            return Vec::new();
        }

        let base = response.url().clone();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(target: "sitecrawl::fetch", "Error reading body of {url}: {e}");
                return Vec::new();
            }
        };

        let links = extract_links(&body, &base);
        debug!(target: "sitecrawl::fetch", "Found {} links on {url}", links.len());
        links
    }
}

/// Resolve every `a[href]` in `html` against `base`, dropping references
/// that cannot be resolved. Malformed HTML degrades to however many anchors
/// the parser recovers, never to an error.
fn extract_links(html: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .map(|resolved| resolved.to_string())
        .collect()
}
