//! Integration tests for the crawler
//!
//! These tests use wiremock to stand up a fake package index and run the
//! crawl and aggregate stages end-to-end over real HTTP.

use index_hosting_survey::config::Config;
use index_hosting_survey::crawler::{crawl, crawl_index, HttpFetcher, PageSource};
use index_hosting_survey::output::{
    aggregate, read_crawl_output, write_crawl_output, write_report, AggregateReport,
};
use index_hosting_survey::FetchError;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a configuration pointing at the mock index
fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.index.base_url = format!("{}/simple/", base_url);
    config.http.timeout_secs = 1;
    config.http.user_agent = "survey-test/1.0".to_string();
    config
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts a small index with three projects
///
/// - `alpha`: one internal file, one external file with checksum, a homepage
///   with an unsafe file
/// - `beta`: listing page returns 500
/// - `gamma`: one external file, two unsafe files
async fn mount_index(server: &MockServer) {
    let base = server.uri();

    mount_html(
        server,
        "/simple/",
        r#"<html><body>
            <a href="alpha/">alpha</a>
            <a href="beta/">beta</a>
            <a href="gamma/">gamma</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_html(
        server,
        "/simple/alpha/",
        format!(
            r#"<html><body>
                <a href="../../packages/alpha-1.0.tar.gz#md5=0123456789abcdef" rel="internal">alpha-1.0.tar.gz</a>
                <a href="{base}/files/alpha-1.1.zip#sha256=abcdef">alpha-1.1.zip</a>
                <a href="{base}/alpha-home/" rel="homepage">alpha home page</a>
            </body></html>"#
        ),
    )
    .await;

    mount_html(
        server,
        "/alpha-home/",
        r#"<html><body>
            <a href="alpha-1.0.tar.gz">already internal</a>
            <a href="alpha-2.0.whl#sha256=abcdef">checksum ignored here</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/simple/beta/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;

    mount_html(
        server,
        "/simple/gamma/",
        r#"<html><body>
            <a href="https://mirror.example.com/gamma-1.0.tgz#sha1=abc123">gamma-1.0.tgz</a>
            <a href="https://mirror.example.com/gamma-0.9.egg">gamma-0.9.egg</a>
            <a href="https://mirror.example.com/gamma-0.8.tar">gamma-0.8.tar</a>
        </body></html>"#
            .to_string(),
    )
    .await;
}

#[tokio::test]
async fn test_full_crawl_classifies_projects() {
    let mock_server = MockServer::start().await;
    mount_index(&mock_server).await;

    let config = create_test_config(&mock_server.uri());
    let output = crawl(&config).await.expect("crawl should succeed");

    assert_eq!(output.len(), 3);

    let alpha = &output["alpha"];
    assert_eq!(alpha.internal, vec!["alpha-1.0.tar.gz"]);
    assert_eq!(alpha.external, vec!["alpha-1.1.zip"]);
    assert_eq!(alpha.r#unsafe, vec!["alpha-2.0.whl"]);

    assert!(output["beta"].is_empty());

    let gamma = &output["gamma"];
    assert!(gamma.internal.is_empty());
    assert_eq!(gamma.external, vec!["gamma-1.0.tgz"]);
    assert_eq!(gamma.r#unsafe, vec!["gamma-0.8.tar", "gamma-0.9.egg"]);
}

#[tokio::test]
async fn test_crawl_then_aggregate_round_trip() {
    let mock_server = MockServer::start().await;
    mount_index(&mock_server).await;

    let config = create_test_config(&mock_server.uri());
    let output = crawl(&config).await.expect("crawl should succeed");

    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("data.json");
    write_crawl_output(&data_path, &output).unwrap();

    let loaded = read_crawl_output(std::fs::File::open(&data_path).unwrap()).unwrap();
    assert_eq!(loaded, output);

    let report = aggregate(&loaded);
    assert_eq!(
        report,
        AggregateReport {
            external1: vec!["alpha".to_string(), "gamma".to_string()],
            external2: vec![],
            internal: vec!["alpha".to_string()],
            r#unsafe: vec!["alpha".to_string(), "gamma".to_string()],
        }
    );

    let report_path = dir.path().join("processed.json");
    write_report(&report_path, &report).unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(written["internal"], serde_json::json!(["alpha"]));
    assert_eq!(written["external2"], serde_json::json!([]));
}

#[tokio::test]
async fn test_unreachable_index_root_fails() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/simple/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let fetcher = HttpFetcher::new(&config.http).unwrap();
    let result = crawl_index(&fetcher, &config.index.base_url).await;

    assert!(matches!(result, Err(FetchError::Status { status: 503, .. })));
}

#[tokio::test]
async fn test_slow_project_times_out_to_empty_result() {
    let mock_server = MockServer::start().await;

    mount_html(
        &mock_server,
        "/simple/",
        r#"<a href="slow/">slow</a>"#.to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/simple/slow/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<a href="/p/slow-1.0.zip" rel="internal">slow</a>"#)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let output = crawl(&config).await.expect("crawl should succeed");

    assert_eq!(output.len(), 1);
    assert!(output["slow"].is_empty());
}

#[tokio::test]
async fn test_http_fetcher_reports_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let fetcher = HttpFetcher::new(&config.http).unwrap();
    let url = format!("{}/missing/", mock_server.uri());

    match fetcher.fetch(&url).await {
        Err(FetchError::Status { url: failed, status }) => {
            assert_eq!(failed, url);
            assert_eq!(status, 404);
        }
        other => panic!("expected status error, got {:?}", other),
    }
}
