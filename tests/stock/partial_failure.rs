use finchart::{FinError, StockBuilder};
use httpmock::Method::GET;

use crate::common;

#[tokio::test]
async fn failed_quote_page_leaves_quote_empty() {
    let server = common::setup_server();
    let _o = common::mock_options(&server, "AAPL");
    let _s = common::mock_search(&server, "AAPL");
    let page = server.mock(|when, then| {
        when.method(GET).path("/quote/AAPL/");
        then.status(500).body("oops");
    });
    let client = common::client_for(&server);

    let stock = StockBuilder::new(&client, "AAPL").fetch().await.unwrap();

    page.assert();
    assert!(stock.quote.is_none());
    assert_eq!(stock.last_price(), Some(229.87));
    assert_eq!(stock.sector.as_deref(), Some("Technology"));
}

#[tokio::test]
async fn failed_options_request_fails_the_stock() {
    let server = common::setup_server();
    let options = server.mock(|when, then| {
        when.method(GET).path("/v7/finance/options/AAPL");
        then.status(404).body("{}");
    });
    let search = common::mock_search(&server, "AAPL");
    let page = common::mock_quote_page(&server, "AAPL");
    let client = common::client_for(&server);

    let err = StockBuilder::new(&client, "AAPL").fetch().await.unwrap_err();

    // All three requests still ran before the result was inspected.
    options.assert();
    search.assert();
    page.assert();
    assert!(matches!(err, FinError::NotFound { url } if url.contains("/v7/finance/options/")));
}

#[tokio::test]
async fn failed_search_request_fails_the_stock() {
    let server = common::setup_server();
    let _o = common::mock_options(&server, "AAPL");
    let _p = common::mock_quote_page(&server, "AAPL");
    let _s = server.mock(|when, then| {
        when.method(GET).path("/v1/finance/search");
        then.status(503);
    });
    let client = common::client_for(&server);

    let err = StockBuilder::new(&client, "AAPL").fetch().await.unwrap_err();
    assert!(matches!(err, FinError::ServerError { status: 503, .. }));
}

#[tokio::test]
async fn options_error_wins_over_search_error() {
    let server = common::setup_server();
    let _o = server.mock(|when, then| {
        when.method(GET).path("/v7/finance/options/AAPL");
        then.status(429);
    });
    let _s = server.mock(|when, then| {
        when.method(GET).path("/v1/finance/search");
        then.status(503);
    });
    let _p = common::mock_quote_page(&server, "AAPL");
    let client = common::client_for(&server);

    let err = StockBuilder::new(&client, "AAPL").fetch().await.unwrap_err();
    assert!(matches!(err, FinError::RateLimited { .. }));
}
