use chrono::TimeZone;
use finchart::{ChartBuilder, FinError, Interval};
use httpmock::Method::GET;

use crate::common;

#[tokio::test]
async fn default_request_is_one_month_daily() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("range", "1mo")
            .query_param("interval", "1d")
            .query_param("events", "div|split")
            .query_param("includePrePost", "false");
        then.status(200).body(common::fixture("chart", "AAPL", "json"));
    });
    let client = common::client_for(&server);

    ChartBuilder::new(&client, "AAPL").fetch().await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn between_sends_period_bounds() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("period1", "1704067200")
            .query_param("period2", "1706745600")
            .query_param("interval", "1h")
            .query_param("includePrePost", "true");
        then.status(200).body(common::fixture("chart", "AAPL", "json"));
    });
    let client = common::client_for(&server);

    let start = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = chrono::Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    ChartBuilder::new(&client, "AAPL")
        .between(start, end)
        .interval(Interval::I1h)
        .prepost(true)
        .fetch()
        .await
        .unwrap();
    mock.assert();
}

#[tokio::test]
async fn reversed_period_is_rejected_without_request() {
    let server = common::setup_server();
    let mock = common::mock_chart(&server, "AAPL");
    let client = common::client_for(&server);

    let start = chrono::Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    let end = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let err = ChartBuilder::new(&client, "AAPL")
        .between(start, end)
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, FinError::InvalidDates));
    assert_eq!(mock.calls(), 0);
}
