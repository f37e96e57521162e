//! Composite stock snapshot built from three concurrent requests.

mod mapper;
mod model;

pub use mapper::build_stock_from_json;
pub use model::Stock;

use crate::core::client::RetryConfig;
use crate::core::time::{DEFAULT_DATE_FORMAT, parse_timezone};
use crate::core::{FinClient, FinError};
use crate::options::OptionsBuilder;
use crate::scrape::{ScrapedQuote, fetch_quote_page_with};
use crate::search::SearchBuilder;

/// Turns a failed optional part into `None`, leaving a trace of why.
fn log_err<T>(res: Result<T, FinError>, part: &str, symbol: &str) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(symbol, part, error = %e, "optional part unavailable");
            None
        }
    }
}

/// A builder for a [`Stock`] snapshot.
///
/// # Example
///
/// ```no_run
/// # use finchart::{FinClient, StockBuilder};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FinClient::default();
/// let stock = StockBuilder::new(&client, "AAPL").fetch().await?;
/// println!("{} last {:?}", stock.display_name(), stock.last_price());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StockBuilder {
    client: FinClient,
    symbol: String,
    date_format: String,
    timezone: Option<String>,
    retry_override: Option<RetryConfig>,
}

impl StockBuilder {
    /// Creates a builder for `symbol`.
    pub fn new(client: &FinClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timezone: None,
            retry_override: None,
        }
    }

    /// strftime-style pattern for the earnings and expiration dates.
    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// IANA zone for rendered dates. Defaults to the exchange zone.
    #[must_use]
    pub fn timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    /// Overrides the client's retry policy for all three requests.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Runs the options, search and quote page requests concurrently and assembles the result.
    ///
    /// # Errors
    ///
    /// Fails with `FinError::InvalidTimezone` before any request if the timezone is unknown.
    /// Otherwise fails if the options or search request fails (checked in that order) or the options
    /// payload has no quote. A failed quote page only leaves [`Stock::quote`] empty.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn fetch(self) -> Result<Stock, FinError> {
        if let Some(tz) = self.timezone.as_deref() {
            parse_timezone(tz)?;
        }

        let options = OptionsBuilder::new(&self.client, &self.symbol)
            .retry_policy(self.retry_override.clone());
        let search = SearchBuilder::new(&self.client, &self.symbol)
            .retry_policy(self.retry_override.clone());

        let (options_res, search_res, page_res) = tokio::join!(
            options.fetch_raw(),
            search.fetch_raw(),
            fetch_quote_page_with(&self.client, &self.symbol, self.retry_override.as_ref()),
        );

        let options_body = options_res?;
        let search_body = search_res?;
        let quote: Option<ScrapedQuote> = log_err(page_res, "quote_page", &self.symbol);

        build_stock_from_json(
            &options_body,
            &search_body,
            quote,
            &self.date_format,
            self.timezone.as_deref(),
        )
    }
}
