//! Result and provenance export
//!
//! Formats the crawl outcome for downstream consumers: `results.txt` (one
//! URL per line, deduplicated union of both sets in insertion order) and
//! `execution.csv` (`Links,Source` header plus one row per recorded edge).
//! The pure formatting functions are separated from the file I/O so they
//! can be tested without touching the filesystem.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

use crate::crawl_engine::{CrawlReport, Edge};

/// Render the deduplicated union of the final URL sets, one per line.
#[must_use]
pub fn format_results(report: &CrawlReport) -> String {
    let mut out = String::new();
    for url in report.unique_links() {
        out.push_str(&url);
        out.push('\n');
    }
    out
}

/// Render the edge log as CSV with a `Links,Source` header.
#[must_use]
pub fn format_edge_log(edges: &[Edge]) -> String {
    let mut out = String::from("Links,Source\n");
    for edge in edges {
        out.push_str(&escape_csv_field(&edge.link));
        out.push(',');
        out.push_str(&escape_csv_field(&edge.source));
        out.push('\n');
    }
    out
}

/// Quote a CSV field when it contains a delimiter, quote or line break.
fn escape_csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Write `results.txt` for the given report.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be written.
pub fn write_results(report: &CrawlReport, path: &Path) -> io::Result<()> {
    fs::write(path, format_results(report))
}

/// Write `execution.csv` for the given edge log.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be written.
pub fn write_edge_log(edges: &[Edge], path: &Path) -> io::Result<()> {
    fs::write(path, format_edge_log(edges))
}
