//! Concurrent frontier drain
//!
//! A single dispatch loop claims URLs from the shared frontier and runs at
//! most `worker_count` worker tasks at a time. Termination requires
//! quiescence: the loop exits only once the frontier is observed empty with
//! every spawned task joined, so a worker still in flight can never be cut
//! off before publishing its discoveries.

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use log::{error, info};
use std::sync::Arc;

use super::crawl_types::WorkerStatus;
use super::fetcher::PageFetcher;
use super::filters::{DomainFilter, clean_url, is_content_url, is_fetchable};
use super::frontier::Frontier;
use super::observer::CrawlObserver;

pub(crate) struct Dispatcher {
    frontier: Arc<Frontier>,
    fetcher: Arc<PageFetcher>,
    filter: Arc<DomainFilter>,
    worker_count: usize,
}

impl Dispatcher {
    pub(crate) fn new(
        frontier: Arc<Frontier>,
        fetcher: Arc<PageFetcher>,
        filter: Arc<DomainFilter>,
        worker_count: usize,
    ) -> Self {
        Self {
            frontier,
            fetcher,
            filter,
            worker_count,
        }
    }

    /// Drain the frontier until quiescent.
    ///
    /// The slot index passed to each worker is `submissions % worker_count`,
    /// a round-robin label for status reporting only; the pool itself is
    /// bounded by the number of in-flight tasks, not by slot ownership.
    pub(crate) async fn run(&self, observer: Arc<dyn CrawlObserver>) {
        let mut active = FuturesUnordered::new();
        let mut submissions: usize = 0;

        loop {
            // Fill phase: claim and submit until the pool is full or the
            // frontier has nothing pending right now.
            while active.len() < self.worker_count {
                let Some(url) = self.frontier.claim_next() else {
                    break;
                };

                let slot = submissions % self.worker_count;
                submissions += 1;

                let frontier = Arc::clone(&self.frontier);
                let fetcher = Arc::clone(&self.fetcher);
                let filter = Arc::clone(&self.filter);
                let task_observer = Arc::clone(&observer);
                active.push(tokio::spawn(async move {
                    process_url(url, slot, &frontier, &fetcher, &filter, task_observer.as_ref())
                        .await;
                }));

                let (visited, unvisited) = self.frontier.snapshot();
                observer.on_results(&visited, &unvisited);
            }

            // Wait phase: a completed worker may have inserted new URLs, so
            // loop back to the fill phase afterwards.
            match active.next().await {
                Some(Ok(())) => {}
                Some(Err(e)) => error!(target: "sitecrawl::workers", "Worker task panicked: {e}"),
                None => {
                    // No task in flight; nothing can insert anymore, so an
                    // empty observation here is quiescence.
                    if self.frontier.is_drained() {
                        break;
                    }
                }
            }
        }
    }
}

/// Process one claimed URL end-to-end: pattern check, fetch, link
/// extraction, filtering, and publishing new discoveries.
async fn process_url(
    url: String,
    slot: usize,
    frontier: &Frontier,
    fetcher: &PageFetcher,
    filter: &DomainFilter,
    observer: &dyn CrawlObserver,
) {
    // A pattern mismatch consumes the URL (it stays claimed as visited) but
    // never fetches it, so it contributes no edges or outbound links.
    if !filter.matches(&url) {
        info!(target: "sitecrawl::workers", "Skipping {url}: host matches no configured pattern");
        observer.on_worker_status(slot, &WorkerStatus::Skipping(url.clone()));
        let counts = frontier.counts();
        observer.on_progress(counts.visited_count, counts.unvisited_count);
        return;
    }

    info!(target: "sitecrawl::workers", "Visiting {url}");
    observer.on_worker_status(slot, &WorkerStatus::Visiting(url.clone()));

    let links = fetcher.fetch_links(&url).await;

    let mut newly_discovered = 0;
    for link in links {
        if !is_fetchable(&link) || !is_content_url(&link) {
            continue;
        }
        if frontier.offer(clean_url(&link).to_string(), &url) {
            newly_discovered += 1;
        }
    }

    let counts = frontier.counts();
    observer.on_progress(counts.visited_count, counts.unvisited_count);
    if newly_discovered > 0 {
        observer.on_edges_updated(&frontier.edges());
    }
    observer.on_worker_status(slot, &WorkerStatus::Finished(url));
}
