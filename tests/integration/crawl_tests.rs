//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use site_contacts::config::{Config, CrawlerConfig, UserAgentConfig};
use site_contacts::crawler::crawl_site;
use site_contacts::url::canonicalize;
use std::collections::HashSet;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with the given page budget and timeout
fn create_test_config(max_pages: u32, timeout_seconds: u64) -> Config {
    Config {
        crawler: CrawlerConfig {
            max_pages,
            timeout_seconds,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: "https://example.com/bot".to_string(),
        },
    }
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!("<html><head><title>Test</title></head><body>{}</body></html>", body),
        "text/html; charset=utf-8",
    )
}

/// Mounts an HTML page that must be requested exactly `times` times
async fn mount_page(server: &MockServer, route: &str, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(body))
        .expect(times)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<h1>Acme</h1>
           <a href="/contact">Contact</a>
           <a href="/about?ref=nav#team">About</a>
           <a href="https://other.com/page">Partner</a>
           <a href="mailto:sales@acme.test?subject=Hello">Sales</a>
           <a href="tel:+15550001111">Call us</a>"#,
        1,
    )
    .await;

    mount_page(
        &mock_server,
        "/contact",
        r#"<p>Reach us at support@acme.test.</p>
           <a href="mailto:a@b.com">Contact</a> Call +1 (555) 123-4567 or text 5551234567.
           <a href="/">Home</a>"#,
        1,
    )
    .await;

    mount_page(
        &mock_server,
        "/about",
        r#"<p>Founded 1999. Office: 030 1234 5678</p><a href="/contact">Contact</a>"#,
        1,
    )
    .await;

    let seed = format!("{}/", base_url);
    let report = crawl_site(&seed, create_test_config(50, 5))
        .await
        .expect("Crawl failed");

    let result = report.result;
    assert_eq!(result.url, seed);

    let emails: HashSet<&str> = result.emails.iter().map(String::as_str).collect();
    assert_eq!(
        emails,
        HashSet::from(["sales@acme.test", "support@acme.test", "a@b.com"])
    );

    let phones: HashSet<&str> = result.phones.iter().map(String::as_str).collect();
    assert!(phones.contains("Call us"));
    assert!(phones.contains("+1 (555) 123-4567"));
    assert!(phones.contains("5551234567"));
    assert!(phones.contains("030 1234 5678"));

    assert_eq!(report.stats.pages_processed, 3);
}

#[tokio::test]
async fn test_page_budget_is_respected() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", r#"<a href="/p1">1</a> one@chain.test"#, 1).await;
    mount_page(&mock_server, "/p1", r#"<a href="/p2">2</a> two@chain.test"#, 1).await;
    mount_page(&mock_server, "/p2", r#"<a href="/p3">3</a> three@chain.test"#, 0).await;

    let report = crawl_site(&format!("{}/", mock_server.uri()), create_test_config(2, 5))
        .await
        .expect("Crawl failed");

    assert_eq!(report.stats.pages_processed, 2);
    assert!(report.stats.pages_processed <= 2);
    assert_eq!(report.result.emails, vec!["one@chain.test", "two@chain.test"]);
}

#[tokio::test]
async fn test_timeout_is_contained() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/slow">Slow</a><a href="/fast">Fast</a>"#,
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html("late@slow.test").set_delay(Duration::from_secs(3)))
        .expect(1)
        .mount(&mock_server)
        .await;

    // links back to the failed page, which must not be retried
    mount_page(
        &mock_server,
        "/fast",
        r#"quick@fast.test <a href="/slow">Slow again</a>"#,
        1,
    )
    .await;

    let report = crawl_site(&format!("{}/", mock_server.uri()), create_test_config(50, 1))
        .await
        .expect("Crawl failed");

    assert_eq!(report.result.emails, vec!["quick@fast.test"]);
    assert_eq!(report.stats.fetch_errors(), 1);
    assert_eq!(report.stats.pages_processed, 2);
}

#[tokio::test]
async fn test_non_html_is_skipped_and_marked_visited() {
    let mock_server = MockServer::start().await;

    // two links to the same document put it on the frontier twice
    mount_page(
        &mock_server,
        "/",
        r#"<a href="/brochure.pdf">Brochure</a>
           <a href="/brochure.pdf?download=1">Download</a>"#,
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/brochure.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("pdf@brochure.test 555-987-6543", "application/pdf"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = crawl_site(&format!("{}/", mock_server.uri()), create_test_config(50, 5))
        .await
        .expect("Crawl failed");

    assert!(report.result.emails.is_empty());
    assert!(report.result.phones.is_empty());
    assert_eq!(report.stats.pages_processed, 1);
    assert_eq!(report.stats.non_html_skipped(), 1);
    assert_eq!(report.stats.duplicates_skipped(), 1);
}

#[tokio::test]
async fn test_non_200_html_is_not_mined_nor_visited() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/missing">Old</a><a href="/missing#again">Old again</a>"#,
        1,
    )
    .await;

    // not marked visited, so the second frontier entry fetches it again
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(
            r#"<html><body>lost@notfound.test <a href="/secret">Secret</a></body></html>"#,
            "text/html",
        ))
        .expect(2)
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/secret", "hidden@secret.test", 0).await;

    let report = crawl_site(&format!("{}/", mock_server.uri()), create_test_config(50, 5))
        .await
        .expect("Crawl failed");

    assert!(report.result.emails.is_empty());
    assert_eq!(report.stats.http_errors(), 2);
    assert_eq!(report.stats.pages_processed, 1);
}

#[tokio::test]
async fn test_no_url_fetched_twice() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/a">A</a><a href="/b?x=1">B</a><a href="/a#top">A again</a>"#,
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/a",
        r#"<a href="/">Home</a><a href="/b">B</a><a href="/a?page=2">Next</a>"#,
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/b",
        r#"<a href="/a">A</a><a href="/?utm_source=b">Home</a>"#,
        1,
    )
    .await;

    let report = crawl_site(&format!("{}/", mock_server.uri()), create_test_config(50, 5))
        .await
        .expect("Crawl failed");

    let fetched = &report.stats.fetched;
    let unique: HashSet<String> = fetched.iter().map(|u| canonicalize(u)).collect();
    assert_eq!(unique.len(), fetched.len(), "duplicate fetch in {:?}", fetched);
    assert_eq!(report.stats.pages_processed, 3);
    assert!(report.stats.duplicates_skipped() >= 1);
}

#[tokio::test]
async fn test_every_fetch_failing_still_returns_result() {
    // bind then release a port so connections to it are refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local address").port();
    drop(listener);
    let seed = format!("http://127.0.0.1:{}/", port);

    let report = crawl_site(&seed, create_test_config(50, 2))
        .await
        .expect("Crawl failed");

    assert_eq!(report.result.url, seed);
    assert!(report.result.emails.is_empty());
    assert!(report.result.phones.is_empty());
    assert_eq!(report.stats.pages_processed, 0);
    assert_eq!(report.stats.fetch_errors(), 1);
}

#[tokio::test]
async fn test_seed_query_is_fetched_as_given_with_client_identifier() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/landing"))
        .and(header(
            "user-agent",
            "Mozilla/5.0 (compatible; TestBot/1.0.0; +https://example.com/bot)",
        ))
        .respond_with(html(r#"hi@landing.test <a href="/landing?campaign=2">Again</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let seed = format!("{}/landing?campaign=1", mock_server.uri());
    let report = crawl_site(&seed, create_test_config(50, 5))
        .await
        .expect("Crawl failed");

    assert_eq!(report.result.url, seed);
    assert_eq!(report.result.emails, vec!["hi@landing.test"]);
    assert_eq!(report.stats.fetched, vec![seed]);
}
