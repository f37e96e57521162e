use crate::core::FinError;
use crate::core::time::{format_in, resolve_timezone};
use crate::options::build_option_chain_from_json;
use crate::scrape::ScrapedQuote;
use crate::search::build_search_from_json;

use super::model::Stock;

/// Assembles a [`Stock`] from raw options and search payloads plus an optional scraped quote.
///
/// The search entry matching the options symbol (ignoring case) supplies sector and
/// industry; without a match the first entry is used. Dates are rendered with `format`
/// in `timezone`, else in the instrument's exchange zone, else in UTC.
///
/// # Errors
///
/// Returns `FinError::MissingData` when the options payload has no quote node, and
/// propagates decoding and timezone errors.
pub fn build_stock_from_json(
    options_body: &str,
    search_body: &str,
    quote: Option<ScrapedQuote>,
    format: &str,
    timezone: Option<&str>,
) -> Result<Stock, FinError> {
    let chain = build_option_chain_from_json(options_body)?;
    let q = chain.quote.ok_or_else(|| {
        FinError::MissingData(format!("no quote in options payload for {}", chain.underlying_symbol))
    })?;
    let symbol = q
        .symbol
        .clone()
        .unwrap_or_else(|| chain.underlying_symbol.clone());

    let search = build_search_from_json(search_body)?;
    let listing = search
        .find_symbol(&symbol)
        .or_else(|| search.quotes.first());

    let tz = resolve_timezone(timezone, q.exchange_timezone_name.as_deref())?;
    let fmt = |ts: i64| format_in(ts, format, tz);

    let regular_market_time = q.regular_market_time.map(fmt).transpose()?;
    let earnings_date = q.earnings_timestamp.map(fmt).transpose()?;
    let expiration_dates = chain
        .expiration_dates
        .iter()
        .map(|&ts| fmt(ts))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Stock {
        symbol,
        short_name: q.short_name.or_else(|| listing.and_then(|l| l.short_name.clone())),
        long_name: q.long_name.or_else(|| listing.and_then(|l| l.long_name.clone())),
        quote_type: q.quote_type.or_else(|| listing.and_then(|l| l.quote_type.clone())),
        exchange: q.exchange.or_else(|| listing.and_then(|l| l.exchange.clone())),
        full_exchange_name: q
            .full_exchange_name
            .or_else(|| listing.and_then(|l| l.exch_disp.clone())),
        currency: q.currency,
        market_state: q.market_state,
        sector: listing.and_then(|l| l.sector.clone().or_else(|| l.sector_disp.clone())),
        industry: listing.and_then(|l| l.industry.clone().or_else(|| l.industry_disp.clone())),
        quote,
        regular_market_price: q.regular_market_price,
        regular_market_change: q.regular_market_change,
        regular_market_change_percent: q.regular_market_change_percent,
        regular_market_time,
        regular_market_open: q.regular_market_open,
        regular_market_day_high: q.regular_market_day_high,
        regular_market_day_low: q.regular_market_day_low,
        regular_market_previous_close: q.regular_market_previous_close,
        regular_market_volume: q.regular_market_volume,
        average_daily_volume3_month: q.average_daily_volume3_month,
        average_daily_volume10_day: q.average_daily_volume10_day,
        fifty_two_week_low: q.fifty_two_week_low,
        fifty_two_week_high: q.fifty_two_week_high,
        market_cap: q.market_cap,
        trailing_pe: q.trailing_pe,
        forward_pe: q.forward_pe,
        eps_trailing_twelve_months: q.eps_trailing_twelve_months,
        eps_forward: q.eps_forward,
        dividend_rate: q.dividend_rate,
        dividend_yield: q.dividend_yield,
        book_value: q.book_value,
        price_to_book: q.price_to_book,
        shares_outstanding: q.shares_outstanding,
        earnings_date,
        expiration_dates,
    })
}
