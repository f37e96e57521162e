//! Epoch-second to calendar-string conversion in an IANA timezone.

use std::fmt::Write as _;

use chrono::TimeZone;
use chrono_tz::Tz;

use crate::core::FinError;

/// Pattern used when the caller does not supply one (`2024-03-01 09:30:00`).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses an IANA zone name such as `America/New_York`.
///
/// # Errors
///
/// Returns `FinError::InvalidTimezone` if the name is not in the tz database.
pub fn parse_timezone(name: &str) -> Result<Tz, FinError> {
    name.parse::<Tz>()
        .map_err(|_| FinError::InvalidTimezone(name.to_string()))
}

/// Picks the zone used to render dates: the caller's choice wins, then the
/// exchange zone reported by the payload, then UTC.
///
/// An unknown caller zone is an error; an unknown payload zone falls back to UTC.
pub(crate) fn resolve_timezone(explicit: Option<&str>, exchange: Option<&str>) -> Result<Tz, FinError> {
    if let Some(name) = explicit {
        return parse_timezone(name);
    }
    Ok(exchange
        .and_then(|name| name.parse::<Tz>().ok())
        .unwrap_or(Tz::UTC))
}

pub(crate) fn format_in(ts: i64, format: &str, tz: Tz) -> Result<String, FinError> {
    let dt = tz
        .timestamp_opt(ts, 0)
        .single()
        .ok_or_else(|| FinError::InvalidParams(format!("timestamp out of range: {ts}")))?;

    let mut out = String::new();
    write!(out, "{}", dt.format(format))
        .map_err(|_| FinError::InvalidParams(format!("invalid date format: {format}")))?;
    Ok(out)
}

/// Renders a Unix timestamp (seconds) with a strftime-style `format` in `timezone`.
///
/// # Errors
///
/// Fails on an unknown timezone, an out-of-range timestamp or an invalid format string.
pub fn convert_timestamp_to_date(ts: i64, format: &str, timezone: &str) -> Result<String, FinError> {
    format_in(ts, format, parse_timezone(timezone)?)
}

/// Batch form of [`convert_timestamp_to_date`]; output order matches input order.
///
/// # Errors
///
/// Fails on the first timestamp that cannot be rendered.
pub fn convert_timestamps_to_dates(
    timestamps: &[i64],
    format: &str,
    timezone: &str,
) -> Result<Vec<String>, FinError> {
    let tz = parse_timezone(timezone)?;
    timestamps.iter().map(|&ts| format_in(ts, format, tz)).collect()
}
