use finchart::{DownloadBuilder, FinError, Interval, Range, download_charts};

use crate::common;

#[tokio::test]
async fn download_keeps_symbol_order() {
    let server = common::setup_server();
    let aapl = common::mock_chart(&server, "AAPL");
    let msft = common::mock_chart(&server, "MSFT");
    let client = common::client_for(&server);

    let charts = download_charts(&client, &["MSFT", "AAPL"], Range::M1, Interval::D1)
        .await
        .unwrap();

    aapl.assert();
    msft.assert();
    let symbols: Vec<&str> = charts.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(symbols, vec!["MSFT", "AAPL"]);
    assert_eq!(charts[0].1.len(), 2);
    assert_eq!(charts[1].1.len(), 3);
}

#[tokio::test]
async fn download_applies_shared_timezone() {
    let server = common::setup_server();
    let _aapl = common::mock_chart(&server, "AAPL");
    let client = common::client_for(&server);

    let charts = DownloadBuilder::new(&client)
        .add_symbol("AAPL")
        .timezone("UTC")
        .date_format("%H:%M")
        .run()
        .await
        .unwrap();

    assert_eq!(charts[0].1.timestamp[0], "14:30");
}

#[tokio::test]
async fn one_failing_symbol_fails_the_download() {
    let server = common::setup_server();
    let _aapl = common::mock_chart(&server, "AAPL");
    let _bad = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/v8/finance/chart/BAD");
        then.status(404);
    });
    let client = common::client_for(&server);

    let err = download_charts(&client, &["AAPL", "BAD"], Range::M1, Interval::D1)
        .await
        .unwrap_err();
    assert!(matches!(err, FinError::NotFound { .. }));
}

#[tokio::test]
async fn empty_symbol_list_is_invalid() {
    let client = finchart::FinClient::default();
    let none: [&str; 0] = [];
    let err = download_charts(&client, &none, Range::M1, Interval::D1)
        .await
        .unwrap_err();
    assert!(matches!(err, FinError::InvalidParams(_)));
}
