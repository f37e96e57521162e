use finchart::{FinClient, SearchBuilder, Ticker, convert_timestamp_to_date};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = FinClient::default();

    // 1. Look a company up by name.
    let found = SearchBuilder::new(&client, "nvidia")
        .quotes_count(5)
        .fetch()
        .await?;
    println!("--- Search: nvidia ---");
    for q in &found.quotes {
        println!(
            "  {:<10} {:<30} {}",
            q.symbol,
            q.short_name.as_deref().unwrap_or("-"),
            q.exch_disp.as_deref().unwrap_or("-")
        );
    }
    println!();

    // 2. The options chain for the second listed expiration.
    let nvda = Ticker::new(&client, "NVDA");
    let expirations = nvda.options().await?;
    let Some(&date) = expirations.get(1).or(expirations.first()) else {
        println!("NVDA has no listed options");
        return Ok(());
    };
    let chain = nvda.option_chain(Some(date)).await?;

    println!(
        "--- NVDA options expiring {} ---",
        convert_timestamp_to_date(date, "%Y-%m-%d", "UTC")?
    );
    println!("{} calls, {} puts", chain.calls.len(), chain.puts.len());
    for c in chain.calls.iter().filter(|c| c.in_the_money).take(5) {
        println!(
            "  {:<22} strike {:>8.2} last {:>8.2} iv {:.3}",
            c.contract_symbol,
            c.strike,
            c.last_price.unwrap_or_default(),
            c.implied_volatility.unwrap_or_default()
        );
    }

    Ok(())
}
