use finchart::{FinError, SearchBuilder, search};
use httpmock::Method::GET;

use crate::common;

#[tokio::test]
async fn search_offline_defaults() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/finance/search")
            .query_param("q", "AAPL")
            .query_param("quotesCount", "10")
            .query_param("newsCount", "0");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("search", "AAPL", "json"));
    });
    let client = common::client_for(&server);

    let resp = search(&client, "AAPL").await.unwrap();
    mock.assert();

    assert_eq!(resp.count, Some(3));
    assert_eq!(resp.quotes.len(), 3);
    assert_eq!(resp.quotes[0].symbol, "AAPL");
    assert_eq!(resp.quotes[0].exch_disp.as_deref(), Some("NASDAQ"));
    assert_eq!(resp.quotes[0].industry.as_deref(), Some("Consumer Electronics"));
    assert_eq!(
        resp.find_symbol("aapl.mx").and_then(|q| q.exch_disp.as_deref()),
        Some("Mexico")
    );
}

#[tokio::test]
async fn search_builder_sends_locale_and_counts() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/finance/search")
            .query_param("q", "apple")
            .query_param("quotesCount", "3")
            .query_param("newsCount", "2")
            .query_param("lang", "en-GB")
            .query_param("region", "GB");
        then.status(200).body(r#"{"count":0,"quotes":[]}"#);
    });
    let client = common::client_for(&server);

    let resp = SearchBuilder::new(&client, "apple")
        .quotes_count(3)
        .news_count(2)
        .lang("en-GB")
        .region("GB")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(resp.quotes.is_empty());
}

#[tokio::test]
async fn empty_query_is_rejected_without_request() {
    let server = common::setup_server();
    let mock = common::mock_search(&server, "AAPL");
    let client = common::client_for(&server);

    let err = SearchBuilder::new(&client, "  ").fetch().await.unwrap_err();
    assert!(matches!(err, FinError::InvalidParams(_)));
    assert_eq!(mock.calls(), 0);
}
