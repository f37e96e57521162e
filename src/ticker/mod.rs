use crate::chart::{Chart, ChartBuilder, Interval, Range};
use crate::core::client::RetryConfig;
use crate::core::{FinClient, FinError};
use crate::options::{OptionChain, OptionsBuilder};
use crate::scrape::{ScrapedQuote, fetch_quote_page_with};
use crate::stock::{Stock, StockBuilder};

/// A high-level interface for a single ticker symbol.
///
/// A `Ticker` is created with a [`FinClient`] and a symbol. It hands out preconfigured
/// builders and has shortcuts for the common fetches.
///
/// # Example
///
/// ```no_run
/// # use finchart::{FinClient, Interval, Range, Ticker};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FinClient::default();
/// let ticker = Ticker::new(&client, "TSLA");
///
/// let chart = ticker.chart(Range::M3, Interval::D1).await?;
/// chart.print_table();
///
/// let stock = ticker.stock().await?;
/// println!("{} trades on {:?}", stock.display_name(), stock.exchange);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ticker {
    client: FinClient,
    symbol: String,
    retry_override: Option<RetryConfig>,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    pub fn new(client: &FinClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            retry_override: None,
        }
    }

    /// The symbol this ticker was created for.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Overrides the client's default retry policy for all calls made through this ticker.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// A chart builder for this symbol, for options not covered by [`Ticker::chart`].
    #[must_use]
    pub fn chart_builder(&self) -> ChartBuilder {
        ChartBuilder::new(&self.client, &self.symbol).retry_policy(self.retry_override.clone())
    }

    /// Fetches a chart with dates in the exchange timezone and the default format.
    ///
    /// # Errors
    ///
    /// See [`ChartBuilder::fetch`].
    pub async fn chart(&self, range: Range, interval: Interval) -> Result<Chart, FinError> {
        self.chart_builder()
            .range(range)
            .interval(interval)
            .fetch()
            .await
    }

    /// A stock builder for this symbol.
    #[must_use]
    pub fn stock_builder(&self) -> StockBuilder {
        StockBuilder::new(&self.client, &self.symbol).retry_policy(self.retry_override.clone())
    }

    /// Fetches the composite [`Stock`] snapshot.
    ///
    /// # Errors
    ///
    /// See [`StockBuilder::fetch`].
    pub async fn stock(&self) -> Result<Stock, FinError> {
        self.stock_builder().fetch().await
    }

    /// Lists the available option expiration dates as Unix seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the options request fails.
    pub async fn options(&self) -> Result<Vec<i64>, FinError> {
        OptionsBuilder::new(&self.client, &self.symbol)
            .retry_policy(self.retry_override.clone())
            .expiration_dates()
            .await
    }

    /// Fetches the options chain for `date`, or the nearest expiration when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options request fails.
    pub async fn option_chain(&self, date: Option<i64>) -> Result<OptionChain, FinError> {
        OptionsBuilder::new(&self.client, &self.symbol)
            .date(date)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }

    /// Scrapes the live price fields from the quote page.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be fetched or carries no price.
    pub async fn scraped_quote(&self) -> Result<ScrapedQuote, FinError> {
        fetch_quote_page_with(&self.client, &self.symbol, self.retry_override.as_ref()).await
    }
}
