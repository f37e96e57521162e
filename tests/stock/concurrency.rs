use std::time::{Duration, Instant};

use finchart::StockBuilder;
use httpmock::Method::GET;

use crate::common;

const DELAY: Duration = Duration::from_millis(300);

#[tokio::test]
async fn stock_requests_run_concurrently() {
    let server = common::setup_server();
    let options = server.mock(|when, then| {
        when.method(GET).path("/v7/finance/options/AAPL");
        then.status(200)
            .delay(DELAY)
            .header("content-type", "application/json")
            .body(common::fixture("options", "AAPL", "json"));
    });
    let search = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/finance/search")
            .query_param("q", "AAPL");
        then.status(200)
            .delay(DELAY)
            .header("content-type", "application/json")
            .body(common::fixture("search", "AAPL", "json"));
    });
    let page = server.mock(|when, then| {
        when.method(GET).path("/quote/AAPL/");
        then.status(200)
            .delay(DELAY)
            .header("content-type", "text/html")
            .body(common::fixture("quote_page", "AAPL", "html"));
    });
    let client = common::client_for(&server);

    let started = Instant::now();
    let stock = StockBuilder::new(&client, "AAPL").fetch().await.unwrap();
    let elapsed = started.elapsed();

    options.assert();
    search.assert();
    page.assert();
    assert!(stock.quote.is_some());

    // Sequential requests would take at least three delays (900ms).
    assert!(elapsed >= DELAY, "finished in {elapsed:?}, faster than a single delay");
    assert!(
        elapsed < DELAY * 2,
        "took {elapsed:?}; requests were not overlapped"
    );
}
