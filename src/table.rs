//! Plain-text table rendering for [`Chart`]s.

use std::fmt::Write as _;

use crate::chart::Chart;

const RULE_WIDTH: usize = 86;

fn price(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_string(), |p| format!("{p:.2}"))
}

fn volume(v: Option<u64>) -> String {
    v.map_or_else(|| "-".to_string(), |n| n.to_string())
}

/// Renders the chart as a fixed-width table, one line per bar.
///
/// Columns: Date (20 wide) then Open, High, Low, Close, Adj Close, Volume (10 wide
/// each). Prices use two decimals; missing values print as `-`.
#[must_use]
pub fn render_table(chart: &Chart) -> String {
    let mut out = String::with_capacity((chart.len() + 2) * (RULE_WIDTH + 1));

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{:<20} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10}",
        "Date", "Open", "High", "Low", "Close", "Adj Close", "Volume"
    );
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for row in chart.rows() {
        let _ = writeln!(
            out,
            "{:<20} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10}",
            row.date,
            price(row.open),
            price(row.high),
            price(row.low),
            price(row.close),
            price(row.adjclose),
            volume(row.volume),
        );
    }
    out
}

impl Chart {
    /// Renders the chart with [`render_table`].
    #[must_use]
    pub fn to_table(&self) -> String {
        render_table(self)
    }

    /// Prints the rendered table to stdout.
    pub fn print_table(&self) {
        print!("{}", render_table(self));
    }
}
