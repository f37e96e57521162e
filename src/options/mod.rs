//! Options chains via the v7 options endpoint.

mod model;
mod wire;

pub use model::{OptionChain, OptionContract, OptionsQuote};

use crate::core::client::RetryConfig;
use crate::core::{FinClient, FinError, net};

use wire::{OptContractNode, OptEnvelope};

/// Decodes a raw options payload into an [`OptionChain`].
///
/// A payload without an `options` block yields empty `calls`/`puts` rather than an error.
///
/// # Errors
///
/// Returns `FinError::Json` for malformed bodies, `FinError::Api` when the payload
/// carries an error object, and `FinError::MissingData` when the result is empty.
pub fn build_option_chain_from_json(body: &str) -> Result<OptionChain, FinError> {
    let env: OptEnvelope = serde_json::from_str(body)?;
    let chain = env
        .option_chain
        .ok_or_else(|| FinError::MissingData("missing optionChain".into()))?;

    if let Some(err) = chain.error {
        return Err(FinError::Api(format!(
            "{} - {}",
            err.code.unwrap_or_default(),
            err.description.unwrap_or_default()
        )));
    }

    let first = chain
        .result
        .and_then(|v| v.into_iter().next())
        .ok_or_else(|| FinError::MissingData("empty options result".into()))?;

    let underlying_symbol = first
        .underlying_symbol
        .clone()
        .or_else(|| first.quote.as_ref().and_then(|q| q.symbol.clone()))
        .unwrap_or_default();

    let by_date = first.options.and_then(|v| v.into_iter().next());
    let (expiration, calls, puts) = match by_date {
        Some(od) => {
            let exp = od.expiration_date;
            (
                exp,
                map_side(od.calls, exp),
                map_side(od.puts, exp),
            )
        }
        None => (None, Vec::new(), Vec::new()),
    };

    Ok(OptionChain {
        underlying_symbol,
        expiration_dates: first.expiration_dates.unwrap_or_default(),
        strikes: first.strikes.unwrap_or_default(),
        has_mini_options: first.has_mini_options.unwrap_or(false),
        quote: first.quote,
        expiration,
        calls,
        puts,
    })
}

fn map_side(side: Option<Vec<OptContractNode>>, expiration: Option<i64>) -> Vec<OptionContract> {
    side.unwrap_or_default()
        .into_iter()
        .map(|c| OptionContract {
            contract_symbol: c.contract_symbol.unwrap_or_default(),
            strike: c.strike.unwrap_or(0.0),
            currency: c.currency,
            last_price: c.last_price,
            change: c.change,
            percent_change: c.percent_change,
            bid: c.bid,
            ask: c.ask,
            volume: c.volume,
            open_interest: c.open_interest,
            implied_volatility: c.implied_volatility,
            in_the_money: c.in_the_money.unwrap_or(false),
            expiration: c.expiration.or(expiration).unwrap_or(0),
            last_trade_date: c.last_trade_date,
            contract_size: c.contract_size,
        })
        .collect()
}

/// A builder for fetching the options chain of one underlying.
#[derive(Debug, Clone)]
pub struct OptionsBuilder {
    client: FinClient,
    symbol: String,
    date: Option<i64>,
    retry_override: Option<RetryConfig>,
}

impl OptionsBuilder {
    /// Creates a builder for the nearest expiration of `symbol`.
    pub fn new(client: &FinClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            date: None,
            retry_override: None,
        }
    }

    /// Selects an expiration (Unix seconds). `None` means the nearest one.
    #[must_use]
    pub fn date(mut self, date: Option<i64>) -> Self {
        self.date = date;
        self
    }

    /// Overrides the client's retry policy for this call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    fn build_url(&self) -> Result<url::Url, FinError> {
        let mut url = net::join_segment(self.client.base_options(), &self.symbol)?;
        if let Some(d) = self.date {
            url.query_pairs_mut().append_pair("date", &d.to_string());
        }
        Ok(url)
    }

    /// Fetches the raw payload; used by the stock snapshot, which maps it itself.
    pub(crate) async fn fetch_raw(&self) -> Result<String, FinError> {
        let url = self.build_url()?;
        let fixture_key = self
            .date
            .map_or_else(|| self.symbol.clone(), |d| format!("{}_{d}", self.symbol));
        net::fetch_body(
            &self.client,
            &url,
            "application/json",
            ("options", &fixture_key, "json"),
            self.retry_override.as_ref(),
        )
        .await
    }

    /// Fetches and maps the chain.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an unmappable payload.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol, date = ?self.date))]
    pub async fn fetch(self) -> Result<OptionChain, FinError> {
        let body = self.fetch_raw().await?;
        build_option_chain_from_json(&body)
    }

    /// Fetches only the list of available expirations.
    ///
    /// # Errors
    ///
    /// Same as [`OptionsBuilder::fetch`].
    pub async fn expiration_dates(self) -> Result<Vec<i64>, FinError> {
        Ok(self.fetch().await?.expiration_dates)
    }
}
