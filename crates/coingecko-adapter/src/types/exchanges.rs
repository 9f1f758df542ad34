/*
[INPUT]:  JSON bodies from /exchanges endpoints
[OUTPUT]: Typed exchange listings, details and volume charts
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::coins::{ChartPoint, Ticker};

/// `{id, name}` pair used by the exchange and derivatives id maps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdName {
    pub id: String,
    pub name: String,
}

/// Row of `/exchanges`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exchange {
    pub id: String,
    pub name: String,
    pub year_established: Option<u32>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub has_trading_incentive: Option<bool>,
    pub trust_score: Option<u32>,
    pub trust_score_rank: Option<u32>,
    pub trade_volume_24h_btc: Option<f64>,
    pub trade_volume_24h_btc_normalized: Option<f64>,
}

/// `/exchanges/{id}` body; the first 100 tickers are embedded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeDetail {
    pub name: String,
    pub year_established: Option<u32>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub facebook_url: Option<String>,
    pub reddit_url: Option<String>,
    pub telegram_url: Option<String>,
    pub slack_url: Option<String>,
    pub other_url_1: Option<String>,
    pub other_url_2: Option<String>,
    pub twitter_handle: Option<String>,
    pub has_trading_incentive: Option<bool>,
    pub centralized: Option<bool>,
    pub public_notice: Option<String>,
    pub alert_notice: Option<String>,
    pub trust_score: Option<u32>,
    pub trust_score_rank: Option<u32>,
    pub trade_volume_24h_btc: Option<f64>,
    pub trade_volume_24h_btc_normalized: Option<f64>,
    pub coins: Option<u32>,
    pub pairs: Option<u32>,
    pub status_updates: Vec<serde_json::Value>,
    pub links: BTreeMap<String, String>,
    pub tickers: Vec<Ticker>,
}

/// `[timestamp_ms, volume_btc]`; the provider sends the volume as a string
pub type VolumeChart = Vec<ChartPoint>;
