use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::client::RetryConfig;
use crate::core::{FinClient, FinError, net};

/* ---------------- Types returned by this module ---------------- */

/// One instrument matched by a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuote {
    pub symbol: String,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub exchange: Option<String>,
    pub exch_disp: Option<String>,
    pub quote_type: Option<String>,
    pub type_disp: Option<String>,
    pub sector: Option<String>,
    pub sector_disp: Option<String>,
    pub industry: Option<String>,
    pub industry_disp: Option<String>,
    pub score: Option<f64>,
}

/// Search results in provider ranking order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub count: Option<i64>,
    pub quotes: Vec<SearchQuote>,
}

impl SearchResponse {
    /// The entry whose symbol equals `symbol`, ignoring ASCII case.
    #[must_use]
    pub fn find_symbol(&self, symbol: &str) -> Option<&SearchQuote> {
        self.quotes
            .iter()
            .find(|q| q.symbol.eq_ignore_ascii_case(symbol))
    }
}

/// Decodes a raw search payload.
///
/// # Errors
///
/// Returns `FinError::Json` if the body is not a search envelope.
pub fn build_search_from_json(body: &str) -> Result<SearchResponse, FinError> {
    let env: V1SearchEnvelope = serde_json::from_str(body)?;

    let quotes = env
        .quotes
        .unwrap_or_default()
        .into_iter()
        // News and list hits come without a symbol.
        .filter_map(|q| {
            let symbol = q.symbol?;
            Some(SearchQuote {
                symbol,
                short_name: q.shortname,
                long_name: q.longname,
                exchange: q.exchange,
                exch_disp: q.exch_disp,
                quote_type: q.quote_type,
                type_disp: q.type_disp,
                sector: q.sector,
                sector_disp: q.sector_disp,
                industry: q.industry,
                industry_disp: q.industry_disp,
                score: q.score,
            })
        })
        .collect();

    Ok(SearchResponse {
        count: env.count,
        quotes,
    })
}

/* ---------------- Public API ---------------- */

/// Searches for symbols matching a query.
///
/// # Errors
///
/// Returns `FinError` if the network request fails or the response cannot be parsed.
pub async fn search(client: &FinClient, query: &str) -> Result<SearchResponse, FinError> {
    SearchBuilder::new(client, query).fetch().await
}

/// A builder for searching for tickers and other assets.
#[derive(Debug, Clone)]
pub struct SearchBuilder {
    client: FinClient,
    query: String,
    quotes_count: Option<u32>,
    news_count: Option<u32>,
    lang: Option<String>,
    region: Option<String>,
    retry_override: Option<RetryConfig>,
}

impl SearchBuilder {
    /// Creates a new `SearchBuilder` for a given search query.
    pub fn new(client: &FinClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            quotes_count: Some(10),
            news_count: Some(0),
            lang: None,
            region: None,
            retry_override: None,
        }
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Sets the maximum number of quote results to return.
    #[must_use]
    pub fn quotes_count(mut self, n: u32) -> Self {
        self.quotes_count = Some(n);
        self
    }

    /// Sets the maximum number of news results to return.
    #[must_use]
    pub fn news_count(mut self, n: u32) -> Self {
        self.news_count = Some(n);
        self
    }

    /// Sets the language for the search results.
    #[must_use]
    pub fn lang(mut self, s: impl Into<String>) -> Self {
        self.lang = Some(s.into());
        self
    }

    /// Sets the region for the search results.
    #[must_use]
    pub fn region(mut self, s: impl Into<String>) -> Self {
        self.region = Some(s.into());
        self
    }

    fn build_url(&self) -> Url {
        let mut url = self.client.base_search().clone();
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("q", &self.query);
            if let Some(n) = self.quotes_count {
                qp.append_pair("quotesCount", &n.to_string());
            }
            if let Some(n) = self.news_count {
                qp.append_pair("newsCount", &n.to_string());
            }
            if let Some(l) = &self.lang {
                qp.append_pair("lang", l);
            }
            if let Some(r) = &self.region {
                qp.append_pair("region", r);
            }
        }
        url
    }

    pub(crate) async fn fetch_raw(&self) -> Result<String, FinError> {
        if self.query.trim().is_empty() {
            return Err(FinError::InvalidParams("search query is empty".into()));
        }
        let url = self.build_url();
        net::fetch_body(
            &self.client,
            &url,
            "application/json",
            ("search", &self.query, "json"),
            self.retry_override.as_ref(),
        )
        .await
    }

    /// Executes the search request.
    ///
    /// # Errors
    ///
    /// This method will return an error if the query is empty, the network request fails,
    /// the API returns a non-successful status code, or the body cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(query = %self.query))]
    pub async fn fetch(self) -> Result<SearchResponse, FinError> {
        let body = self.fetch_raw().await?;
        build_search_from_json(&body)
    }
}

/* ------------- Minimal serde mapping of /v1/finance/search ------------- */

#[derive(Deserialize)]
struct V1SearchEnvelope {
    #[serde(default)]
    count: Option<i64>,
    #[serde(default)]
    quotes: Option<Vec<V1SearchQuote>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct V1SearchQuote {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default, rename = "shortname")]
    shortname: Option<String>,
    #[serde(default, rename = "longname")]
    longname: Option<String>,
    #[serde(default)]
    quote_type: Option<String>,
    #[serde(default)]
    exchange: Option<String>,
    #[serde(default)]
    exch_disp: Option<String>,
    #[serde(default)]
    type_disp: Option<String>,
    #[serde(default)]
    sector: Option<String>,
    #[serde(default)]
    sector_disp: Option<String>,
    #[serde(default)]
    industry: Option<String>,
    #[serde(default)]
    industry_disp: Option<String>,
    #[serde(default)]
    score: Option<f64>,
}
