use futures::future::try_join_all;

use crate::chart::{Chart, ChartBuilder, Interval, Range};
use crate::core::client::RetryConfig;
use crate::core::{FinClient, FinError};

/// A builder for fetching charts for several symbols concurrently with the same parameters.
#[derive(Debug, Clone)]
pub struct DownloadBuilder {
    client: FinClient,
    symbols: Vec<String>,
    range: Range,
    interval: Interval,
    date_format: Option<String>,
    timezone: Option<String>,
    retry_override: Option<RetryConfig>,
}

impl DownloadBuilder {
    /// Creates a builder with no symbols, one month of daily bars.
    #[must_use]
    pub fn new(client: &FinClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
            range: Range::M1,
            interval: Interval::D1,
            date_format: None,
            timezone: None,
            retry_override: None,
        }
    }

    /// Replaces the symbol list.
    #[must_use]
    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one symbol.
    #[must_use]
    pub fn add_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    #[must_use]
    pub const fn range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Date pattern applied to every chart.
    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    /// Timezone applied to every chart. Defaults to each symbol's exchange zone.
    #[must_use]
    pub fn timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    /// Overrides the client's retry policy for every request.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    fn chart_for(&self, symbol: &str) -> ChartBuilder {
        let mut cb = ChartBuilder::new(&self.client, symbol)
            .range(self.range)
            .interval(self.interval)
            .retry_policy(self.retry_override.clone());
        if let Some(f) = &self.date_format {
            cb = cb.date_format(f.clone());
        }
        if let Some(tz) = &self.timezone {
            cb = cb.timezone(tz.clone());
        }
        cb
    }

    /// Fetches all charts. Results keep the order of the symbol list.
    ///
    /// # Errors
    ///
    /// Returns `FinError::InvalidParams` for an empty symbol list, otherwise the first
    /// error from any of the chart fetches.
    #[tracing::instrument(skip(self), err, fields(symbols = self.symbols.len()))]
    pub async fn run(self) -> Result<Vec<(String, Chart)>, FinError> {
        if self.symbols.is_empty() {
            return Err(FinError::InvalidParams("no symbols specified".into()));
        }

        let futures = self.symbols.iter().map(|sym| {
            let sym = sym.clone();
            let cb = self.chart_for(&sym);
            async move {
                let chart = cb.fetch().await?;
                Ok::<(String, Chart), FinError>((sym, chart))
            }
        });

        try_join_all(futures).await
    }
}

/// Fetches one chart per symbol concurrently.
///
/// # Errors
///
/// See [`DownloadBuilder::run`].
pub async fn download_charts<S: AsRef<str>>(
    client: &FinClient,
    symbols: &[S],
    range: Range,
    interval: Interval,
) -> Result<Vec<(String, Chart)>, FinError> {
    DownloadBuilder::new(client)
        .symbols(symbols.iter().map(|s| s.as_ref().to_string()))
        .range(range)
        .interval(interval)
        .run()
        .await
}
