#![allow(dead_code)]

use std::time::Duration;
use std::{fs, path::Path};

use finchart::{Backoff, FinClient, RetryConfig};
use httpmock::{Method::GET, Mock, MockServer};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, symbol, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client whose every base URL points at `server`, with retries off.
pub fn client_for(server: &MockServer) -> FinClient {
    client_builder_for(server).retry_enabled(false).build().unwrap()
}

pub fn client_builder_for(server: &MockServer) -> finchart::FinClientBuilder {
    let base = server.base_url();
    FinClient::builder()
        .base_chart(Url::parse(&format!("{base}/v8/finance/chart/")).unwrap())
        .base_options(Url::parse(&format!("{base}/v7/finance/options/")).unwrap())
        .base_search(Url::parse(&format!("{base}/v1/finance/search")).unwrap())
        .base_quote_page(Url::parse(&format!("{base}/quote/")).unwrap())
}

/// Retry policy with a negligible fixed delay for tests that count attempts.
pub fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        backoff: Backoff::Fixed(Duration::from_millis(1)),
        ..RetryConfig::default()
    }
}

pub fn mock_chart<'a>(server: &'a MockServer, symbol: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/v8/finance/chart/{}", symbol));
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("chart", symbol, "json"));
    })
}

pub fn mock_options<'a>(server: &'a MockServer, symbol: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/v7/finance/options/{}", symbol));
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("options", symbol, "json"));
    })
}

pub fn mock_search<'a>(server: &'a MockServer, symbol: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/finance/search")
            .query_param("q", symbol);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("search", symbol, "json"));
    })
}

pub fn mock_quote_page<'a>(server: &'a MockServer, symbol: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/quote/{}/", symbol));
        then.status(200)
            .header("content-type", "text/html")
            .body(fixture("quote_page", symbol, "html"));
    })
}
