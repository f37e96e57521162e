//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Chart API base (symbol is appended).
pub(crate) const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// Options API base (symbol is appended).
pub(crate) const DEFAULT_BASE_OPTIONS: &str =
    "https://query2.finance.yahoo.com/v7/finance/options/";

/// Search API endpoint (query goes in `q`).
pub(crate) const DEFAULT_BASE_SEARCH: &str = "https://query2.finance.yahoo.com/v1/finance/search";

/// Quote HTML page base (symbol is appended).
pub(crate) const DEFAULT_BASE_QUOTE_PAGE: &str = "https://finance.yahoo.com/quote/";
