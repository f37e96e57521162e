use chrono::Duration;
use finchart::{FinClient, Interval, Range, Ticker, download_charts};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. A client with a 10-second timeout; retries use the default backoff.
    let client = FinClient::builder()
        .timeout(Duration::seconds(10).to_std()?)
        .build()?;

    // 2. One month of daily bars, rendered in the exchange timezone.
    let aapl = Ticker::new(&client, "AAPL");
    let chart = aapl.chart(Range::M1, Interval::D1).await?;
    println!("--- {} ({}) ---", chart.symbol, chart.timezone);
    chart.print_table();
    println!();

    // 3. The same symbol as hourly bars with a custom pattern in UTC.
    let hourly = aapl
        .chart_builder()
        .range(Range::D5)
        .interval(Interval::I1h)
        .date_format("%a %H:%M")
        .timezone("UTC")
        .fetch()
        .await?;
    println!("--- {} hourly, UTC ---", hourly.symbol);
    for row in hourly.rows().take(5) {
        println!("  {}  close {:?}", row.date, row.close);
    }
    println!();

    // 4. Several symbols at once.
    let charts = download_charts(&client, &["MSFT", "NVDA", "^GSPC"], Range::D5, Interval::D1).await?;
    for (symbol, chart) in &charts {
        let last = chart.rows().last().and_then(|r| r.close);
        println!("{symbol:>6}: {} bars, last close {last:?}", chart.len());
    }

    Ok(())
}
