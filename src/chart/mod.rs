//! Historical OHLCV charts via the v8 chart endpoint.
//!
//! Internals are split into:
//! - `wire`:   serde mapping of the raw payload
//! - `mapper`: payload → [`Chart`] with timestamp rendering
//! - `params`: [`Range`] and [`Interval`]

mod mapper;
mod model;
mod params;
mod wire;

pub use mapper::build_chart_from_json;
pub use model::{AdjCloseSeries, Chart, ChartRow, Indicators, QuoteSeries};
pub use params::{Interval, Range};

use crate::core::client::RetryConfig;
use crate::core::time::DEFAULT_DATE_FORMAT;
use crate::core::{FinClient, FinError, net};

/// A builder for fetching a historical price chart for a single symbol.
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    client: FinClient,
    symbol: String,
    range: Option<Range>,
    period: Option<(i64, i64)>,
    interval: Interval,
    include_prepost: bool,
    date_format: String,
    timezone: Option<String>,
    retry_override: Option<RetryConfig>,
}

impl ChartBuilder {
    /// Creates a new `ChartBuilder` for a given symbol (default: 1 month of daily bars).
    pub fn new(client: &FinClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            range: Some(Range::M1),
            period: None,
            interval: Interval::D1,
            include_prepost: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timezone: None,
            retry_override: None,
        }
    }

    /// Sets a relative time range for the request (e.g., `1y`, `6mo`).
    ///
    /// This will override any previously set period using `between()`.
    #[must_use]
    pub fn range(mut self, range: Range) -> Self {
        self.period = None;
        self.range = Some(range);
        self
    }

    /// Sets an absolute time period for the request using start and end timestamps.
    ///
    /// This will override any previously set range using `range()`.
    #[must_use]
    pub fn between(
        mut self,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.range = None;
        self.period = Some((start.timestamp(), end.timestamp()));
        self
    }

    /// Sets the time interval for each bar.
    #[must_use]
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Include pre-market and post-market bars for intraday intervals. (Default: `false`)
    ///
    /// Ignored for daily and longer intervals.
    #[must_use]
    pub fn prepost(mut self, yes: bool) -> Self {
        self.include_prepost = yes;
        self
    }

    /// strftime-style pattern used to render bar dates.
    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// IANA zone used to render bar dates instead of the exchange zone.
    #[must_use]
    pub fn timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    /// Overrides the client's retry policy for this call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    fn build_url(&self) -> Result<url::Url, FinError> {
        let mut url = net::join_segment(self.client.base_chart(), &self.symbol)?;
        {
            let mut qp = url.query_pairs_mut();

            if let Some((p1, p2)) = self.period {
                if p1 >= p2 {
                    return Err(FinError::InvalidDates);
                }
                qp.append_pair("period1", &p1.to_string());
                qp.append_pair("period2", &p2.to_string());
            } else if let Some(r) = self.range {
                qp.append_pair("range", r.as_str());
            } else {
                return Err(FinError::InvalidParams("no range or period set".into()));
            }

            qp.append_pair("interval", self.interval.as_str());
            qp.append_pair("events", "div|split");
            qp.append_pair(
                "includePrePost",
                if self.include_prepost && self.interval.is_intraday() {
                    "true"
                } else {
                    "false"
                },
            );
        }
        Ok(url)
    }

    /// Executes the request and maps the payload into a [`Chart`].
    ///
    /// # Errors
    ///
    /// Returns an error on invalid parameters, transport failure, a non-success status,
    /// or a payload that cannot be mapped.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn fetch(self) -> Result<Chart, FinError> {
        if let Some(tz) = self.timezone.as_deref() {
            crate::core::time::parse_timezone(tz)?;
        }
        let url = self.build_url()?;

        let body = net::fetch_body(
            &self.client,
            &url,
            "application/json",
            ("chart", &self.symbol, "json"),
            self.retry_override.as_ref(),
        )
        .await?;

        build_chart_from_json(&body, &self.date_format, self.timezone.as_deref())
    }
}
