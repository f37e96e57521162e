use serde::Serialize;

/// Relative lookback window understood by the chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Range {
    D1,
    D5,
    M1,
    M3,
    M6,
    Y1,
    Y2,
    Y5,
    Y10,
    Ytd,
    Max,
}

impl Range {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
            Self::M6 => "6mo",
            Self::Y1 => "1y",
            Self::Y2 => "2y",
            Self::Y5 => "5y",
            Self::Y10 => "10y",
            Self::Ytd => "ytd",
            Self::Max => "max",
        }
    }
}

/// Bar width of each data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Interval {
    I1m,
    I2m,
    I5m,
    I15m,
    I30m,
    I60m,
    I90m,
    I1h,
    D1,
    D5,
    W1,
    M1,
    M3,
}

impl Interval {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I1m => "1m",
            Self::I2m => "2m",
            Self::I5m => "5m",
            Self::I15m => "15m",
            Self::I30m => "30m",
            Self::I60m => "60m",
            Self::I90m => "90m",
            Self::I1h => "1h",
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::W1 => "1wk",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
        }
    }

    /// Intraday bars never carry an adjusted-close series.
    #[must_use]
    pub const fn is_intraday(self) -> bool {
        matches!(
            self,
            Self::I1m | Self::I2m | Self::I5m | Self::I15m | Self::I30m | Self::I60m | Self::I90m | Self::I1h
        )
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
