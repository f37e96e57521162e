use finchart::{ChartBuilder, Interval, Range, Ticker};

use crate::common;

#[tokio::test]
async fn chart_offline_maps_fixture() {
    let server = common::setup_server();
    let mock = common::mock_chart(&server, "AAPL");
    let client = common::client_for(&server);

    let chart = ChartBuilder::new(&client, "AAPL").fetch().await.unwrap();
    mock.assert();

    assert_eq!(chart.symbol, "AAPL");
    assert_eq!(chart.currency.as_deref(), Some("USD"));
    assert_eq!(chart.timezone, "America/New_York");
    assert_eq!(chart.len(), 3);
    assert_eq!(chart.timestamp[0], "2024-01-02 09:30:00");

    let q = chart.indicators.primary().unwrap();
    assert_eq!(q.close[2], Some(181.91));
    assert_eq!(q.volume[1], Some(58_414_500));
    assert_eq!(chart.indicators.primary_adjclose().unwrap()[0], Some(184.73));

    let last = chart.rows().last().unwrap();
    assert_eq!(last.date, "2024-01-04 09:30:00");
    assert_eq!(last.adjclose, Some(181.02));
}

#[tokio::test]
async fn chart_custom_format_and_timezone() {
    let server = common::setup_server();
    let _mock = common::mock_chart(&server, "AAPL");
    let client = common::client_for(&server);

    let chart = ChartBuilder::new(&client, "AAPL")
        .date_format("%d.%m.%Y %H:%M")
        .timezone("Europe/Berlin")
        .fetch()
        .await
        .unwrap();

    assert_eq!(chart.timezone, "Europe/Berlin");
    assert_eq!(chart.timestamp[0], "02.01.2024 15:30");
    assert_eq!(chart.exchange_timezone_name.as_deref(), Some("America/New_York"));
}

#[tokio::test]
async fn chart_unknown_timezone_fails_before_request() {
    let server = common::setup_server();
    let mock = common::mock_chart(&server, "AAPL");
    let client = common::client_for(&server);

    let err = ChartBuilder::new(&client, "AAPL")
        .timezone("Atlantis/Capital")
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, finchart::FinError::InvalidTimezone(_)));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn ticker_chart_uses_range_and_interval() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("range", "3mo")
            .query_param("interval", "1wk");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("chart", "AAPL", "json"));
    });
    let client = common::client_for(&server);

    let chart = Ticker::new(&client, "AAPL")
        .chart(Range::M3, Interval::W1)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(chart.len(), 3);
}

#[tokio::test]
async fn chart_without_adjclose_node() {
    let server = common::setup_server();
    let body = r#"{"chart":{"result":[{
        "meta":{"symbol":"AAPL","exchangeTimezoneName":"America/New_York"},
        "timestamp":[1704205800,1704205860],
        "indicators":{"quote":[{"open":[187.1,187.2],"high":[187.3,187.4],"low":[187.0,187.1],"close":[187.2,null],"volume":[1000,null]}]}
      }],"error":null}}"#;
    let _mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/v8/finance/chart/AAPL");
        then.status(200).body(body);
    });
    let client = common::client_for(&server);

    let chart = ChartBuilder::new(&client, "AAPL")
        .range(Range::D1)
        .interval(Interval::I1m)
        .fetch()
        .await
        .unwrap();

    assert!(chart.indicators.adjclose.is_empty());
    let rows: Vec<_> = chart.rows().collect();
    assert_eq!(rows[1].close, None);
    assert_eq!(rows[1].adjclose, None);
    assert_eq!(rows[1].date, "2024-01-02 09:31:00");
}

#[tokio::test]
async fn chart_error_object_surfaces_as_api_error() {
    let server = common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/v8/finance/chart/NOPE");
        then.status(200).body(
            r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#,
        );
    });
    let client = common::client_for(&server);

    let err = ChartBuilder::new(&client, "NOPE").fetch().await.unwrap_err();
    match err {
        finchart::FinError::Api(msg) => assert!(msg.contains("delisted")),
        other => panic!("expected Api, got {other:?}"),
    }
}
