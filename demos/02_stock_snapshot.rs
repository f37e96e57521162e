use finchart::{FinClient, StockBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = FinClient::default();
    let symbol = std::env::args().nth(1).unwrap_or_else(|| "MSFT".to_string());

    let stock = StockBuilder::new(&client, &symbol)
        .date_format("%Y-%m-%d")
        .fetch()
        .await?;

    println!("--- {} ({}) ---", stock.display_name(), stock.symbol);
    println!(
        "Exchange: {}",
        stock.full_exchange_name.as_deref().unwrap_or("-")
    );
    println!("Sector:   {}", stock.sector.as_deref().unwrap_or("-"));
    println!("Industry: {}", stock.industry.as_deref().unwrap_or("-"));
    println!("State:    {}", stock.market_state.as_deref().unwrap_or("-"));
    println!();

    match &stock.quote {
        Some(q) => println!(
            "Live: {} {} ({})",
            q.price,
            q.change.as_deref().unwrap_or(""),
            q.change_percent.as_deref().unwrap_or("")
        ),
        None => println!("Live quote unavailable, last known {:?}", stock.regular_market_price),
    }
    println!(
        "Day range: {:?} - {:?}, volume {:?}",
        stock.regular_market_day_low, stock.regular_market_day_high, stock.regular_market_volume
    );
    println!(
        "52w range: {:?} - {:?}",
        stock.fifty_two_week_low, stock.fifty_two_week_high
    );
    println!(
        "Market cap {:?}, P/E {:?} (fwd {:?}), EPS {:?}",
        stock.market_cap, stock.trailing_pe, stock.forward_pe, stock.eps_trailing_twelve_months
    );
    println!("Next earnings: {}", stock.earnings_date.as_deref().unwrap_or("-"));
    println!("Option expirations: {}", stock.expiration_dates.join(", "));

    Ok(())
}
