use serde::Deserialize;

use crate::core::wire::de_opt_u64_lenient;

use super::model::OptionsQuote;

#[derive(Deserialize)]
pub(crate) struct OptEnvelope {
    #[serde(rename = "optionChain")]
    pub(crate) option_chain: Option<OptChainNode>,
}

#[derive(Deserialize)]
pub(crate) struct OptChainNode {
    pub(crate) result: Option<Vec<OptResultNode>>,
    #[serde(default)]
    pub(crate) error: Option<OptErrorNode>,
}

#[derive(Deserialize)]
pub(crate) struct OptErrorNode {
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OptResultNode {
    #[serde(default)]
    pub(crate) underlying_symbol: Option<String>,
    #[serde(default)]
    pub(crate) expiration_dates: Option<Vec<i64>>,
    #[serde(default)]
    pub(crate) strikes: Option<Vec<f64>>,
    #[serde(default)]
    pub(crate) has_mini_options: Option<bool>,
    #[serde(default)]
    pub(crate) quote: Option<OptionsQuote>,
    #[serde(default)]
    pub(crate) options: Option<Vec<OptByDateNode>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OptByDateNode {
    #[serde(default)]
    pub(crate) expiration_date: Option<i64>,
    #[serde(default)]
    pub(crate) calls: Option<Vec<OptContractNode>>,
    #[serde(default)]
    pub(crate) puts: Option<Vec<OptContractNode>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OptContractNode {
    #[serde(default)]
    pub(crate) contract_symbol: Option<String>,
    #[serde(default)]
    pub(crate) strike: Option<f64>,
    #[serde(default)]
    pub(crate) currency: Option<String>,
    #[serde(default)]
    pub(crate) last_price: Option<f64>,
    #[serde(default)]
    pub(crate) change: Option<f64>,
    #[serde(default)]
    pub(crate) percent_change: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_u64_lenient")]
    pub(crate) volume: Option<u64>,
    #[serde(default, deserialize_with = "de_opt_u64_lenient")]
    pub(crate) open_interest: Option<u64>,
    #[serde(default)]
    pub(crate) bid: Option<f64>,
    #[serde(default)]
    pub(crate) ask: Option<f64>,
    #[serde(default)]
    pub(crate) contract_size: Option<String>,
    #[serde(default)]
    pub(crate) expiration: Option<i64>,
    #[serde(default)]
    pub(crate) last_trade_date: Option<i64>,
    #[serde(default)]
    pub(crate) implied_volatility: Option<f64>,
    #[serde(default)]
    pub(crate) in_the_money: Option<bool>,
}
