//! Command-line shell around the crawl engine
//!
//! Parses arguments, runs the two-phase crawl with a logging observer, and
//! exports `results.txt` and `execution.csv` into the output directory.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

use sitecrawl::{CrawlConfig, LogObserver, SitemapCrawler, export};

#[derive(Parser, Debug)]
#[command(
    name = "sitecrawl",
    about = "Crawl a website starting from its sitemap and record the discovered link graph"
)]
struct Args {
    /// Seed sitemap URL, e.g. https://example.com/sitemap.xml
    sitemap_url: String,

    /// Number of concurrent crawl workers
    #[arg(short, long, default_value_t = 4)]
    workers: usize,

    /// Regex a URL's host must match to be fetched (repeatable; none = accept all)
    #[arg(short, long = "pattern")]
    patterns: Vec<String>,

    /// Directory receiving results.txt and execution.csv
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = CrawlConfig::builder()
        .sitemap_url(&args.sitemap_url)
        .worker_count(args.workers)
        .domain_patterns(args.patterns)
        .request_timeout_secs(args.timeout)
        .build()?;

    let crawler = SitemapCrawler::new(config)?;
    let report = crawler.run(Arc::new(LogObserver)).await;

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("failed to create output directory {}", args.output_dir.display())
    })?;

    let results_path = args.output_dir.join("results.txt");
    export::write_results(&report, &results_path)
        .with_context(|| format!("failed to write {}", results_path.display()))?;
    info!("Results saved to {}", results_path.display());

    let csv_path = args.output_dir.join("execution.csv");
    export::write_edge_log(&report.edges, &csv_path)
        .with_context(|| format!("failed to write {}", csv_path.display()))?;
    info!("Execution saved to {}", csv_path.display());

    println!(
        "{} unique links, {} edges recorded",
        report.unique_links().len(),
        report.edges.len()
    );
    Ok(())
}
