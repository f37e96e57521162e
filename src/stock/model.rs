use serde::Serialize;

use crate::scrape::ScrapedQuote;

/// A point-in-time view of one listed instrument, assembled from the options quote,
/// the search listing and the scraped quote page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stock {
    pub symbol: String,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub quote_type: Option<String>,
    pub exchange: Option<String>,
    pub full_exchange_name: Option<String>,
    pub currency: Option<String>,
    pub market_state: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,

    /// Live figures from the quote page. `None` when the page could not be scraped.
    pub quote: Option<ScrapedQuote>,

    pub regular_market_price: Option<f64>,
    pub regular_market_change: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    /// Time of the last regular-session trade, formatted.
    pub regular_market_time: Option<String>,
    pub regular_market_open: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_previous_close: Option<f64>,
    pub regular_market_volume: Option<u64>,
    pub average_daily_volume3_month: Option<u64>,
    pub average_daily_volume10_day: Option<u64>,
    pub fifty_two_week_low: Option<f64>,
    pub fifty_two_week_high: Option<f64>,

    pub market_cap: Option<u64>,
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
    pub eps_trailing_twelve_months: Option<f64>,
    pub eps_forward: Option<f64>,
    pub dividend_rate: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub book_value: Option<f64>,
    pub price_to_book: Option<f64>,
    pub shares_outstanding: Option<u64>,

    pub earnings_date: Option<String>,
    /// Listed option expirations, formatted, in provider order.
    pub expiration_dates: Vec<String>,
}

impl Stock {
    /// Best available last price: the scraped live price, else the options quote price.
    #[must_use]
    pub fn last_price(&self) -> Option<f64> {
        self.quote
            .as_ref()
            .and_then(ScrapedQuote::price_f64)
            .or(self.regular_market_price)
    }

    /// Long name if known, else short name, else the symbol.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.long_name
            .as_deref()
            .or(self.short_name.as_deref())
            .unwrap_or(&self.symbol)
    }
}
