use finchart::{FinError, StockBuilder, Ticker};

use crate::common;

#[tokio::test]
async fn stock_joins_all_three_sources() {
    let server = common::setup_server();
    let options = common::mock_options(&server, "AAPL");
    let search = common::mock_search(&server, "AAPL");
    let page = common::mock_quote_page(&server, "AAPL");
    let client = common::client_for(&server);

    let stock = Ticker::new(&client, "AAPL").stock().await.unwrap();

    options.assert();
    search.assert();
    page.assert();

    assert_eq!(stock.symbol, "AAPL");
    assert_eq!(stock.display_name(), "Apple Inc.");
    assert_eq!(stock.exchange.as_deref(), Some("NMS"));
    assert_eq!(stock.full_exchange_name.as_deref(), Some("NasdaqGS"));
    assert_eq!(stock.sector.as_deref(), Some("Technology"));
    assert_eq!(stock.industry.as_deref(), Some("Consumer Electronics"));
    assert_eq!(stock.market_cap, Some(3_475_000_000_000));
    assert_eq!(stock.trailing_pe, Some(37.8));
    assert_eq!(stock.average_daily_volume3_month, Some(47_120_000));
    assert_eq!(stock.fifty_two_week_high, Some(260.1));

    assert_eq!(stock.earnings_date.as_deref(), Some("2025-01-30 16:00:00"));
    assert_eq!(
        stock.expiration_dates,
        vec![
            "2025-01-16 19:00:00".to_string(),
            "2025-01-23 19:00:00".to_string()
        ]
    );

    let q = stock.quote.as_ref().unwrap();
    assert_eq!(q.post_market_price.as_deref(), Some("230.15"));
    assert_eq!(stock.last_price(), Some(229.87));
}

#[tokio::test]
async fn stock_date_format_and_timezone() {
    let server = common::setup_server();
    let _o = common::mock_options(&server, "AAPL");
    let _s = common::mock_search(&server, "AAPL");
    let _p = common::mock_quote_page(&server, "AAPL");
    let client = common::client_for(&server);

    let stock = StockBuilder::new(&client, "AAPL")
        .date_format("%Y-%m-%d")
        .timezone("UTC")
        .fetch()
        .await
        .unwrap();

    assert_eq!(stock.expiration_dates, vec!["2025-01-17", "2025-01-24"]);
    assert_eq!(stock.earnings_date.as_deref(), Some("2025-01-30"));
}

#[tokio::test]
async fn unknown_timezone_fails_before_any_request() {
    let server = common::setup_server();
    let options = common::mock_options(&server, "AAPL");
    let search = common::mock_search(&server, "AAPL");
    let page = common::mock_quote_page(&server, "AAPL");
    let client = common::client_for(&server);

    let err = StockBuilder::new(&client, "AAPL")
        .timezone("Atlantis/Capital")
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, FinError::InvalidTimezone(z) if z == "Atlantis/Capital"));
    assert_eq!(options.calls(), 0);
    assert_eq!(search.calls(), 0);
    assert_eq!(page.calls(), 0);
}
