//! finchart: Yahoo Finance charts, options, search and stock snapshots.
//!
//! ```no_run
//! use finchart::{FinClient, Interval, Range, Ticker};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), finchart::FinError> {
//! let client = FinClient::default();
//! let chart = Ticker::new(&client, "AAPL").chart(Range::M1, Interval::D1).await?;
//! chart.print_table();
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod core;
pub mod download;
pub mod options;
pub mod scrape;
pub mod search;
pub mod stock;
pub mod table;
pub mod ticker;

pub use chart::{
    AdjCloseSeries, Chart, ChartBuilder, ChartRow, Indicators, Interval, QuoteSeries, Range,
    build_chart_from_json,
};
pub use crate::core::time::{DEFAULT_DATE_FORMAT, convert_timestamp_to_date, convert_timestamps_to_dates};
pub use crate::core::{Backoff, FinClient, FinClientBuilder, FinError, RetryConfig};
pub use download::{DownloadBuilder, download_charts};
pub use options::{OptionChain, OptionContract, OptionsBuilder, OptionsQuote};
pub use scrape::{ScrapedQuote, fetch_quote_page};
pub use search::{SearchBuilder, SearchQuote, SearchResponse, search};
pub use stock::{Stock, StockBuilder, build_stock_from_json};
pub use table::render_table;
pub use ticker::Ticker;
