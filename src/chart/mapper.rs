//! JSON → [`Chart`] mapping for the chart endpoint.

use crate::core::FinError;
use crate::core::time::{format_in, resolve_timezone};

use super::model::{AdjCloseSeries, Chart, Indicators, QuoteSeries};
use super::wire::{ChartEnvelope, ChartResult, IndicatorsNode, QuoteBlock};

/// Builds a [`Chart`] from a raw chart response body.
///
/// Dates are rendered with `format` in `timezone` when given, otherwise in the
/// exchange timezone reported by the payload, otherwise in UTC.
///
/// # Errors
///
/// Returns `FinError::Json` for malformed bodies, `FinError::Api` when the payload
/// carries an error object, and `FinError::MissingData` when the result or its meta
/// block is absent.
pub fn build_chart_from_json(
    body: &str,
    format: &str,
    timezone: Option<&str>,
) -> Result<Chart, FinError> {
    let env: ChartEnvelope = serde_json::from_str(body)?;
    let chart = env
        .chart
        .ok_or_else(|| FinError::MissingData("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(FinError::Api(format!(
            "{} - {}",
            err.code.unwrap_or_default(),
            err.description.unwrap_or_default()
        )));
    }

    let r0 = chart
        .result
        .and_then(|v| v.into_iter().next())
        .ok_or_else(|| FinError::MissingData("empty chart result".into()))?;

    map_result(r0, format, timezone)
}

fn map_result(r0: ChartResult, format: &str, timezone: Option<&str>) -> Result<Chart, FinError> {
    let meta = r0
        .meta
        .ok_or_else(|| FinError::MissingData("chart meta".into()))?;
    let symbol = meta
        .symbol
        .ok_or_else(|| FinError::MissingData("chart meta symbol".into()))?;

    let tz = resolve_timezone(timezone, meta.exchange_timezone_name.as_deref())?;

    let raw_timestamps = r0.timestamp.unwrap_or_default();
    let timestamp = raw_timestamps
        .iter()
        .map(|&ts| format_in(ts, format, tz))
        .collect::<Result<Vec<_>, _>>()?;

    let indicators = map_indicators(r0.indicators, raw_timestamps.len());

    Ok(Chart {
        symbol,
        currency: meta.currency,
        exchange_timezone_name: meta.exchange_timezone_name,
        timestamp,
        raw_timestamps,
        timezone: tz.name().to_string(),
        date_format: format.to_string(),
        indicators,
    })
}

/// Pads or truncates every series to `n` so rows stay index-aligned with the timestamps.
fn aligned<T: Clone>(mut v: Vec<Option<T>>, n: usize) -> Vec<Option<T>> {
    v.resize(n, None);
    v
}

fn map_quote(q: QuoteBlock, n: usize) -> QuoteSeries {
    QuoteSeries {
        open: aligned(q.open, n),
        high: aligned(q.high, n),
        low: aligned(q.low, n),
        close: aligned(q.close, n),
        volume: aligned(q.volume, n),
    }
}

fn map_indicators(node: Option<IndicatorsNode>, n: usize) -> Indicators {
    let Some(node) = node else {
        return Indicators {
            quote: vec![map_quote(QuoteBlock::default(), n)],
            adjclose: Vec::new(),
        };
    };

    let quote = node
        .quote
        .into_iter()
        .next()
        .map_or_else(|| map_quote(QuoteBlock::default(), n), |q| map_quote(q, n));

    let adjclose = node
        .adjclose
        .and_then(|v| v.into_iter().next())
        .map(|a| AdjCloseSeries {
            adjclose: aligned(a.adjclose, n),
        })
        .into_iter()
        .collect();

    Indicators {
        quote: vec![quote],
        adjclose,
    }
}
