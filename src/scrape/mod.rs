//! Live quote scraped from the public quote HTML page.

mod extract;

use serde::Serialize;

use crate::core::client::RetryConfig;
use crate::core::{FinClient, FinError, net};

use extract::extract_streamer_fields;

/// Live price fields as displayed on the quote page, kept as the page renders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapedQuote {
    pub symbol: String,
    pub price: String,
    pub change: Option<String>,
    pub change_percent: Option<String>,
    pub pre_market_price: Option<String>,
    pub post_market_price: Option<String>,
}

impl ScrapedQuote {
    /// The price as a number, ignoring thousands separators.
    #[must_use]
    pub fn price_f64(&self) -> Option<f64> {
        parse_number(&self.price)
    }

    /// The change as a number, ignoring sign prefixes and separators.
    #[must_use]
    pub fn change_f64(&self) -> Option<f64> {
        self.change.as_deref().and_then(parse_number)
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, ',' | '(' | ')' | '%' | '+'))
        .collect();
    cleaned.trim().parse::<f64>().ok()
}

/// Extracts a [`ScrapedQuote`] from quote page HTML.
///
/// # Errors
///
/// Returns `FinError::MissingData` if the page has no `regularMarketPrice` element for `symbol`.
pub fn build_quote_from_html(html: &str, symbol: &str) -> Result<ScrapedQuote, FinError> {
    let mut fields = extract_streamer_fields(html, symbol);
    let price = fields.remove("regularMarketPrice").ok_or_else(|| {
        FinError::MissingData(format!("regularMarketPrice not found on quote page for {symbol}"))
    })?;

    Ok(ScrapedQuote {
        symbol: symbol.to_string(),
        price,
        change: fields.remove("regularMarketChange"),
        change_percent: fields.remove("regularMarketChangePercent"),
        pre_market_price: fields.remove("preMarketPrice"),
        post_market_price: fields.remove("postMarketPrice"),
    })
}

/// Fetches the quote page for `symbol` and scrapes its live price fields.
///
/// # Errors
///
/// Returns an error on transport failure, a non-success status, or a page without a price.
pub async fn fetch_quote_page(client: &FinClient, symbol: &str) -> Result<ScrapedQuote, FinError> {
    fetch_quote_page_with(client, symbol, None).await
}

#[tracing::instrument(skip(client, retry_override), err)]
pub(crate) async fn fetch_quote_page_with(
    client: &FinClient,
    symbol: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<ScrapedQuote, FinError> {
    let mut url = net::join_segment(client.base_quote_page(), symbol)?;
    // The page is served with a trailing slash.
    url.path_segments_mut()
        .map_err(|()| FinError::InvalidParams("quote page base cannot take a path".into()))?
        .push("");
    let body = net::fetch_body(
        client,
        &url,
        "text/html,application/xhtml+xml",
        ("quote_page", symbol, "html"),
        retry_override,
    )
    .await?;
    build_quote_from_html(&body, symbol)
}
