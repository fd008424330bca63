//! End-to-end crawl tests against a local mock HTTP server

use std::sync::Arc;

use sitecrawl::{
    CrawlConfig, CrawlEvent, CrawlEventBus, EventBusObserver, NoOpObserver, PageFetcher,
    SitemapIngester, crawl, crawl_with_observer, export,
};

fn config_for(server_url: &str) -> CrawlConfig {
    CrawlConfig::builder()
        .sitemap_url(format!("{server_url}/sitemap.xml"))
        .worker_count(1)
        .request_timeout_secs(5)
        .build()
        .expect("test config is valid")
}

#[tokio::test]
async fn test_full_two_phase_crawl() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    let _index = server
        .mock("GET", "/sitemap.xml")
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <sitemapindex>
                <sitemap><loc>{url}/sitemap-posts.xml</loc></sitemap>
                <url><loc>{url}/page-1</loc></url>
            </sitemapindex>"#
        ))
        .create_async()
        .await;
    let _posts = server
        .mock("GET", "/sitemap-posts.xml")
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(format!(
            r#"<urlset>
                <url><loc>{url}/page-2</loc></url>
                <url><loc>{url}/assets/pic.png</loc></url>
                <url><loc>{url}/wp-admin/login</loc></url>
                <url><loc>{url}/page-3#section</loc></url>
            </urlset>"#
        ))
        .create_async()
        .await;
    let _page_1 = server
        .mock("GET", "/page-1")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(
            r##"<html><body>
                <a href="/page-4">new</a>
                <a href="mailto:contact@example.com">mail</a>
                <a href="tel:+15551234">call</a>
                <a href="/image.png">image</a>
                <a href="/wp-content/uploads/doc">cms</a>
                <a href="#top">top</a>
                <a href="/page-2">already seeded</a>
            </body></html>"##,
        )
        .create_async()
        .await;
    let page_2 = server
        .mock("GET", "/page-2")
        .with_status(500)
        .create_async()
        .await;
    let _page_3 = server
        .mock("GET", "/page-3")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html><body>no links here</body></html>")
        .create_async()
        .await;
    let _page_4 = server
        .mock("GET", "/page-4")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(r#"<html><body><a href="/page-1">back</a></body></html>"#)
        .create_async()
        .await;

    let report = crawl(config_for(&url)).await.expect("crawl should run");

    // Quiescence: the run drained everything it discovered.
    assert!(report.unvisited.is_empty());
    assert_eq!(
        report.visited,
        vec![
            format!("{url}/page-1"),
            format!("{url}/page-2"),
            format!("{url}/page-3"),
            format!("{url}/page-4"),
        ]
    );

    // Only the genuinely new discovery got an edge; seeded URLs, dropped
    // schemes, asset extensions and CMS paths contribute none.
    assert_eq!(report.edges.len(), 1);
    assert_eq!(report.edges[0].link, format!("{url}/page-4"));
    assert_eq!(report.edges[0].source, format!("{url}/page-1"));

    // The failed fetch was attempted once and its URL stayed visited.
    page_2.assert_async().await;

    let results = export::format_results(&report);
    assert_eq!(results.lines().count(), 4);
    assert!(!results.contains(".png"));
    assert!(!results.contains("wp-"));
    assert!(!results.contains('#'));
}

#[tokio::test]
async fn test_sitemap_ingestion_expands_nested_documents() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    let _index = server
        .mock("GET", "/sitemap.xml")
        .with_status(200)
        .with_body(format!(
            "<sitemapindex><sitemap><loc>{url}/sitemap-posts.xml</loc></sitemap></sitemapindex>"
        ))
        .create_async()
        .await;
    let _posts = server
        .mock("GET", "/sitemap-posts.xml")
        .with_status(200)
        .with_body(format!(
            "<urlset>\
             <url><loc>{url}/post-1</loc></url>\
             <url><loc>{url}/image.png</loc></url>\
             </urlset>"
        ))
        .create_async()
        .await;

    let config = config_for(&url);
    let fetcher = PageFetcher::new(&config).expect("client should build");
    let ingester = SitemapIngester::new(&fetcher);

    let content_urls = ingester
        .ingest(&format!("{url}/sitemap.xml"), &NoOpObserver)
        .await;

    // Sitemap documents are expanded, not kept; invalid content is dropped.
    assert_eq!(content_urls, vec![format!("{url}/post-1")]);
}

#[tokio::test]
async fn test_cyclic_sitemap_references_terminate() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    let sitemap_a = server
        .mock("GET", "/sitemap.xml")
        .with_status(200)
        .with_body(format!(
            "<sitemapindex>\
             <sitemap><loc>{url}/sitemap-b.xml</loc></sitemap>\
             <url><loc>{url}/leaf-a</loc></url>\
             </sitemapindex>"
        ))
        .expect(1)
        .create_async()
        .await;
    let sitemap_b = server
        .mock("GET", "/sitemap-b.xml")
        .with_status(200)
        .with_body(format!(
            "<sitemapindex>\
             <sitemap><loc>{url}/sitemap.xml</loc></sitemap>\
             <url><loc>{url}/leaf-b</loc></url>\
             </sitemapindex>"
        ))
        .expect(1)
        .create_async()
        .await;
    let _leaf_a = server
        .mock("GET", "/leaf-a")
        .with_status(200)
        .with_body("<html></html>")
        .create_async()
        .await;
    let _leaf_b = server
        .mock("GET", "/leaf-b")
        .with_status(200)
        .with_body("<html></html>")
        .create_async()
        .await;

    let report = crawl(config_for(&url)).await.expect("crawl should run");

    // Each sitemap document was fetched exactly once despite the cycle.
    sitemap_a.assert_async().await;
    sitemap_b.assert_async().await;
    assert_eq!(
        report.visited,
        vec![format!("{url}/leaf-a"), format!("{url}/leaf-b")]
    );
    assert!(report.unvisited.is_empty());
}

#[tokio::test]
async fn test_pattern_mismatch_consumes_url_without_fetching() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    let _index = server
        .mock("GET", "/sitemap.xml")
        .with_status(200)
        .with_body(format!("<urlset><url><loc>{url}/page-1</loc></url></urlset>"))
        .create_async()
        .await;
    let page_1 = server
        .mock("GET", "/page-1")
        .with_status(200)
        .with_body("<html></html>")
        .expect(0)
        .create_async()
        .await;

    let config = CrawlConfig::builder()
        .sitemap_url(format!("{url}/sitemap.xml"))
        .worker_count(1)
        .domain_pattern(r"no-such-host\.example")
        .request_timeout_secs(5)
        .build()
        .expect("test config is valid");

    let report = crawl(config).await.expect("crawl should run");

    // The URL was claimed (visited) but never fetched, so it produced no
    // outbound links and no edges.
    page_1.assert_async().await;
    assert_eq!(report.visited, vec![format!("{url}/page-1")]);
    assert!(report.unvisited.is_empty());
    assert!(report.edges.is_empty());
}

#[tokio::test]
async fn test_offsite_discovery_is_recorded_but_not_fetched() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    let _index = server
        .mock("GET", "/sitemap.xml")
        .with_status(200)
        .with_body(format!("<urlset><url><loc>{url}/page-1</loc></url></urlset>"))
        .create_async()
        .await;
    let _page_1 = server
        .mock("GET", "/page-1")
        .with_status(200)
        .with_body(r#"<html><a href="https://offsite.example/landing">away</a></html>"#)
        .create_async()
        .await;

    let config = CrawlConfig::builder()
        .sitemap_url(format!("{url}/sitemap.xml"))
        .worker_count(1)
        .domain_pattern(r"127\.0\.0\.1")
        .request_timeout_secs(5)
        .build()
        .expect("test config is valid");

    let report = crawl(config).await.expect("crawl should run");

    // The off-site link is credited to its discoverer and consumed by the
    // pattern filter without any request leaving the mock host.
    assert_eq!(
        report.visited,
        vec![
            format!("{url}/page-1"),
            "https://offsite.example/landing".to_string(),
        ]
    );
    assert!(report.unvisited.is_empty());
    assert_eq!(report.edges.len(), 1);
    assert_eq!(report.edges[0].link, "https://offsite.example/landing");
    assert_eq!(report.edges[0].source, format!("{url}/page-1"));
}

#[tokio::test]
async fn test_all_page_fetches_failing_still_completes() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    let _index = server
        .mock("GET", "/sitemap.xml")
        .with_status(200)
        .with_body(format!(
            "<urlset>\
             <url><loc>{url}/x</loc></url>\
             <url><loc>{url}/y</loc></url>\
             </urlset>"
        ))
        .create_async()
        .await;
    let _x = server.mock("GET", "/x").with_status(500).create_async().await;
    let _y = server.mock("GET", "/y").with_status(500).create_async().await;

    let report = crawl(config_for(&url)).await.expect("crawl should run");

    assert_eq!(report.visited, vec![format!("{url}/x"), format!("{url}/y")]);
    assert!(report.unvisited.is_empty());
    assert!(report.edges.is_empty());
}

#[tokio::test]
async fn test_shared_discovery_yields_single_edge() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    let _index = server
        .mock("GET", "/sitemap.xml")
        .with_status(200)
        .with_body(format!(
            "<urlset>\
             <url><loc>{url}/a</loc></url>\
             <url><loc>{url}/b</loc></url>\
             </urlset>"
        ))
        .create_async()
        .await;
    let _a = server
        .mock("GET", "/a")
        .with_status(200)
        .with_body(r#"<html><a href="/c">shared</a></html>"#)
        .create_async()
        .await;
    let _b = server
        .mock("GET", "/b")
        .with_status(200)
        .with_body(r#"<html><a href="/c">shared</a></html>"#)
        .create_async()
        .await;
    let _c = server
        .mock("GET", "/c")
        .with_status(200)
        .with_body("<html></html>")
        .create_async()
        .await;

    let config = CrawlConfig::builder()
        .sitemap_url(format!("{url}/sitemap.xml"))
        .worker_count(4)
        .request_timeout_secs(5)
        .build()
        .expect("test config is valid");

    let report = crawl(config).await.expect("crawl should run");

    // Both pages link to /c; whichever worker got there first owns the edge.
    let shared_link = format!("{url}/c");
    let edges: Vec<_> = report
        .edges
        .iter()
        .filter(|edge| edge.link == shared_link)
        .collect();
    assert_eq!(edges.len(), 1);
    let expected_sources = [format!("{url}/a"), format!("{url}/b")];
    assert!(expected_sources.contains(&edges[0].source));
    assert!(report.visited.contains(&shared_link));
}

#[tokio::test]
async fn test_crawl_reports_through_event_bus() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    let _index = server
        .mock("GET", "/sitemap.xml")
        .with_status(200)
        .with_body(format!("<urlset><url><loc>{url}/page-1</loc></url></urlset>"))
        .create_async()
        .await;
    let _page_1 = server
        .mock("GET", "/page-1")
        .with_status(200)
        .with_body("<html></html>")
        .create_async()
        .await;

    let bus = Arc::new(CrawlEventBus::new(1024));
    let mut receiver = bus.subscribe();
    let observer = Arc::new(EventBusObserver::new(Arc::clone(&bus)));

    let report = crawl_with_observer(config_for(&url), observer)
        .await
        .expect("crawl should run");
    assert_eq!(report.visited, vec![format!("{url}/page-1")]);

    let mut statuses = Vec::new();
    let mut saw_progress = false;
    let mut saw_worker_status = false;
    while let Ok(event) = receiver.try_recv() {
        match event {
            CrawlEvent::StatusChanged { message, .. } => statuses.push(message),
            CrawlEvent::ProgressUpdated { .. } => saw_progress = true,
            CrawlEvent::WorkerStatusChanged { .. } => saw_worker_status = true,
            CrawlEvent::ResultsSnapshot {
                visited, unvisited, ..
            } => {
                for url in &visited {
                    assert!(!unvisited.contains(url), "{url} present in both sets");
                }
            }
            _ => {}
        }
    }

    let expected_phases = [
        "Starting sitemap parsing...",
        "Resetting counts...",
        "Crawling links...",
        "Crawling complete!",
    ];
    for phase in expected_phases {
        assert!(
            statuses.iter().any(|s| s == phase),
            "missing status message: {phase}"
        );
    }
    assert!(saw_progress);
    assert!(saw_worker_status);
}
