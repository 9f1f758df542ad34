/*
[INPUT]:  JSON bodies from /derivatives endpoints
[OUTPUT]: Typed derivative tickers and derivative exchange models
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::coins::CurrencyMap;
use super::serde_helpers;

/// Row of `/derivatives`. Several numeric fields arrive as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivativeTicker {
    pub market: String,
    pub symbol: String,
    pub index_id: Option<String>,
    #[serde(deserialize_with = "serde_helpers::f64_option_lenient")]
    pub price: Option<f64>,
    pub price_percentage_change_24h: Option<f64>,
    pub contract_type: Option<String>,
    pub index: Option<f64>,
    pub basis: Option<f64>,
    pub spread: Option<f64>,
    pub funding_rate: Option<f64>,
    pub open_interest: Option<f64>,
    pub volume_24h: Option<f64>,
    pub last_traded_at: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::f64_option_lenient")]
    pub expired_at: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivativeExchange {
    pub name: String,
    pub id: Option<String>,
    pub open_interest_btc: Option<f64>,
    #[serde(deserialize_with = "serde_helpers::f64_option_lenient")]
    pub trade_volume_24h_btc: Option<f64>,
    pub number_of_perpetual_pairs: Option<u32>,
    pub number_of_futures_pairs: Option<u32>,
    pub image: Option<String>,
    pub year_established: Option<u32>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Ticker embedded in `/derivatives/exchanges/{id}` when requested
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivativeExchangeTicker {
    pub symbol: String,
    pub base: String,
    pub target: String,
    pub trade_url: Option<String>,
    pub contract_type: Option<String>,
    pub last: Option<f64>,
    pub h24_percentage_change: Option<f64>,
    pub index: Option<f64>,
    pub index_basis_percentage: Option<f64>,
    pub bid_ask_spread: Option<f64>,
    pub funding_rate: Option<f64>,
    pub open_interest_usd: Option<f64>,
    pub h24_volume: Option<f64>,
    pub converted_volume: CurrencyMap,
    pub converted_last: CurrencyMap,
    pub last_traded: Option<i64>,
    pub expired_at: Option<i64>,
}

/// `/derivatives/exchanges/{id}` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivativeExchangeDetail {
    #[serde(flatten)]
    pub exchange: DerivativeExchange,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tickers: Vec<DerivativeExchangeTicker>,
}
