use finchart::{FinError, Ticker, fetch_quote_page};
use httpmock::Method::GET;

use crate::common;

#[tokio::test]
async fn quote_page_offline() {
    let server = common::setup_server();
    let mock = common::mock_quote_page(&server, "AAPL");
    let client = common::client_for(&server);

    let q = fetch_quote_page(&client, "AAPL").await.unwrap();
    mock.assert();

    // The index ticker in the page header must not leak into the quote.
    assert_eq!(q.price, "229.87");
    assert_eq!(q.price_f64(), Some(229.87));
    assert_eq!(q.change.as_deref(), Some("1.02"));
    assert_eq!(q.change_percent.as_deref(), Some("0.4457"));
    assert_eq!(q.post_market_price.as_deref(), Some("230.15"));
    assert_eq!(q.pre_market_price, None);
}

#[tokio::test]
async fn page_without_price_is_missing_data() {
    let server = common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/quote/ZZZZ/");
        then.status(200)
            .header("content-type", "text/html")
            .body("<html><body>Symbol lookup</body></html>");
    });
    let client = common::client_for(&server);

    let err = Ticker::new(&client, "ZZZZ").scraped_quote().await.unwrap_err();
    assert!(matches!(err, FinError::MissingData(_)));
}
