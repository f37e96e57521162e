use serde::{Deserialize, Serialize};

use crate::core::wire::de_opt_u64_lenient;

/// A single call or put.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionContract {
    pub contract_symbol: String,
    pub strike: f64,
    pub currency: Option<String>,
    pub last_price: Option<f64>,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub volume: Option<u64>,
    pub open_interest: Option<u64>,
    pub implied_volatility: Option<f64>,
    pub in_the_money: bool,
    /// Expiry as Unix seconds.
    pub expiration: i64,
    pub last_trade_date: Option<i64>,
    pub contract_size: Option<String>,
}

/// Snapshot of the underlying instrument that the options endpoint embeds in its payload.
///
/// This is the richest quote the provider returns without authentication, so it also
/// backs [`crate::Stock`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsQuote {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub quote_type: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub full_exchange_name: Option<String>,
    #[serde(default)]
    pub exchange_timezone_name: Option<String>,
    #[serde(default)]
    pub market_state: Option<String>,

    #[serde(default)]
    pub regular_market_price: Option<f64>,
    #[serde(default)]
    pub regular_market_change: Option<f64>,
    #[serde(default)]
    pub regular_market_change_percent: Option<f64>,
    #[serde(default)]
    pub regular_market_time: Option<i64>,
    #[serde(default)]
    pub regular_market_open: Option<f64>,
    #[serde(default)]
    pub regular_market_day_high: Option<f64>,
    #[serde(default)]
    pub regular_market_day_low: Option<f64>,
    #[serde(default)]
    pub regular_market_previous_close: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_u64_lenient")]
    pub regular_market_volume: Option<u64>,

    #[serde(default)]
    pub bid: Option<f64>,
    #[serde(default)]
    pub ask: Option<f64>,

    #[serde(default)]
    pub fifty_two_week_low: Option<f64>,
    #[serde(default)]
    pub fifty_two_week_high: Option<f64>,
    #[serde(default)]
    pub fifty_day_average: Option<f64>,
    #[serde(default)]
    pub two_hundred_day_average: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_u64_lenient")]
    pub average_daily_volume3_month: Option<u64>,
    #[serde(default, deserialize_with = "de_opt_u64_lenient")]
    pub average_daily_volume10_day: Option<u64>,

    #[serde(default, deserialize_with = "de_opt_u64_lenient")]
    pub market_cap: Option<u64>,
    #[serde(default, deserialize_with = "de_opt_u64_lenient")]
    pub shares_outstanding: Option<u64>,
    #[serde(default, rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    #[serde(default, rename = "forwardPE")]
    pub forward_pe: Option<f64>,
    #[serde(default)]
    pub eps_trailing_twelve_months: Option<f64>,
    #[serde(default)]
    pub eps_forward: Option<f64>,
    #[serde(default)]
    pub book_value: Option<f64>,
    #[serde(default)]
    pub price_to_book: Option<f64>,

    #[serde(default)]
    pub dividend_rate: Option<f64>,
    #[serde(default)]
    pub dividend_yield: Option<f64>,
    #[serde(default)]
    pub trailing_annual_dividend_rate: Option<f64>,
    #[serde(default)]
    pub trailing_annual_dividend_yield: Option<f64>,
    #[serde(default)]
    pub dividend_date: Option<i64>,
    #[serde(default)]
    pub earnings_timestamp: Option<i64>,
}

/// Options chain for one expiration plus the list of all available expirations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionChain {
    pub underlying_symbol: String,
    /// All listed expirations as Unix seconds.
    pub expiration_dates: Vec<i64>,
    pub strikes: Vec<f64>,
    pub has_mini_options: bool,
    pub quote: Option<OptionsQuote>,
    /// Expiration the `calls`/`puts` belong to, when the payload carried contracts.
    pub expiration: Option<i64>,
    pub calls: Vec<OptionContract>,
    pub puts: Vec<OptionContract>,
}
