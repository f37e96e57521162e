use serde::Serialize;

/// One OHLCV series block. Every vector has the same length as [`Chart::timestamp`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuoteSeries {
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
    pub volume: Vec<Option<u64>>,
}

/// Adjusted-close series, aligned like [`QuoteSeries`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdjCloseSeries {
    pub adjclose: Vec<Option<f64>>,
}

/// Container for the parallel indicator arrays of a chart.
///
/// `adjclose` is empty when the provider omitted it (intraday intervals).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Indicators {
    pub quote: Vec<QuoteSeries>,
    pub adjclose: Vec<AdjCloseSeries>,
}

impl Indicators {
    /// The primary OHLCV block, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&QuoteSeries> {
        self.quote.first()
    }

    /// The primary adjusted-close series, if the payload carried one.
    #[must_use]
    pub fn primary_adjclose(&self) -> Option<&[Option<f64>]> {
        self.adjclose.first().map(|a| a.adjclose.as_slice())
    }
}

/// Historical price chart for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub symbol: String,
    pub currency: Option<String>,
    pub exchange_timezone_name: Option<String>,
    /// Bar timestamps rendered with `date_format` in `timezone`.
    pub timestamp: Vec<String>,
    /// The same bars as Unix seconds.
    pub raw_timestamps: Vec<i64>,
    /// IANA zone the dates were rendered in.
    pub timezone: String,
    pub date_format: String,
    pub indicators: Indicators,
}

/// A single bar, borrowed out of a [`Chart`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRow<'a> {
    pub date: &'a str,
    pub ts: i64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub adjclose: Option<f64>,
    pub volume: Option<u64>,
}

impl Chart {
    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamp.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamp.is_empty()
    }

    /// Iterates bars in timestamp order.
    pub fn rows(&self) -> impl Iterator<Item = ChartRow<'_>> + '_ {
        let quote = self.indicators.primary();
        let adj = self.indicators.primary_adjclose();
        let pick = |v: Option<&Vec<Option<f64>>>, i: usize| v.and_then(|v| v.get(i).copied().flatten());

        self.timestamp
            .iter()
            .zip(self.raw_timestamps.iter())
            .enumerate()
            .map(move |(i, (date, &ts))| ChartRow {
                date: date.as_str(),
                ts,
                open: pick(quote.map(|q| &q.open), i),
                high: pick(quote.map(|q| &q.high), i),
                low: pick(quote.map(|q| &q.low), i),
                close: pick(quote.map(|q| &q.close), i),
                adjclose: adj.and_then(|a| a.get(i).copied().flatten()),
                volume: quote.and_then(|q| q.volume.get(i).copied().flatten()),
            })
    }
}
