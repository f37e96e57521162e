//! Public client surface + builder.
//! Internals are split into `retry` (backoff + resend loop) and `constants` (UA + defaults).

mod constants;
mod retry;

use crate::core::FinError;
use constants::{
    DEFAULT_BASE_CHART, DEFAULT_BASE_OPTIONS, DEFAULT_BASE_QUOTE_PAGE, DEFAULT_BASE_SEARCH,
    USER_AGENT,
};
pub use retry::{Backoff, RetryConfig};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client, base URLs and the retry policy.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct FinClient {
    http: Client,
    base_chart: Url,
    base_options: Url,
    base_search: Url,
    base_quote_page: Url,
    retry: RetryConfig,
}

impl Default for FinClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl FinClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> FinClientBuilder {
        FinClientBuilder::default()
    }

    /// The retry policy applied when a call does not override it.
    #[must_use]
    pub const fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) const fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) const fn base_options(&self) -> &Url {
        &self.base_options
    }
    pub(crate) const fn base_search(&self) -> &Url {
        &self.base_search
    }
    pub(crate) const fn base_quote_page(&self) -> &Url {
        &self.base_quote_page
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FinClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_options: Option<Url>,
    base_search: Option<Url>,
    base_quote_page: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl FinClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the options API base (e.g., `https://query2.finance.yahoo.com/v7/finance/options/`).
    #[must_use]
    pub fn base_options(mut self, url: Url) -> Self {
        self.base_options = Some(url);
        self
    }

    /// Override the search endpoint (e.g., `https://query2.finance.yahoo.com/v1/finance/search`).
    #[must_use]
    pub fn base_search(mut self, url: Url) -> Self {
        self.base_search = Some(url);
        self
    }

    /// Override the quote HTML base (e.g., `https://finance.yahoo.com/quote/`).
    #[must_use]
    pub fn base_quote_page(mut self, url: Url) -> Self {
        self.base_quote_page = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the client-wide retry policy.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Turn retries on or off while keeping the rest of the policy.
    #[must_use]
    pub fn retry_enabled(mut self, yes: bool) -> Self {
        let mut cfg = self.retry.take().unwrap_or_default();
        cfg.enabled = yes;
        self.retry = Some(cfg);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails if a default URL cannot be parsed or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<FinClient, FinError> {
        let base_chart = match self.base_chart {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CHART)?,
        };
        let base_options = match self.base_options {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_OPTIONS)?,
        };
        let base_search = match self.base_search {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SEARCH)?,
        };
        let base_quote_page = match self.base_quote_page {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE_PAGE)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FinClient {
            http,
            base_chart,
            base_options,
            base_search,
            base_quote_page,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
