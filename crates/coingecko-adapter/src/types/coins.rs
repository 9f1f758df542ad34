/*
[INPUT]:  JSON bodies from /coins, /simple and contract endpoints
[OUTPUT]: Typed coin, price, ticker and chart models
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Per-currency values keyed by lowercase currency code (`usd`, `btc`, ...)
pub type CurrencyMap = BTreeMap<String, f64>;

/// `/simple/price` and `/simple/token_price/{id}` body: coin id (or contract
/// address) to a map of `usd`, `usd_market_cap`, `last_updated_at`, ...
pub type SimplePrices = BTreeMap<String, BTreeMap<String, f64>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinListEntry {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Only present with `include_platform=true`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<BTreeMap<String, Option<String>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewCoin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub activated_at: Option<i64>,
}

/// One entry of the top gainers or losers list.
///
/// Price and change fields are keyed by the requested currency and window
/// (`usd`, `usd_24h_vol`, `usd_24h_change`), so they are kept as a map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopMover {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: Option<String>,
    pub market_cap_rank: Option<u32>,
    /// Numeric fields not named above; anything else is dropped
    #[serde(flatten, deserialize_with = "serde_helpers::numeric_map_lenient")]
    pub metrics: BTreeMap<String, Option<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopGainersLosers {
    pub top_gainers: Vec<TopMover>,
    pub top_losers: Vec<TopMover>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sparkline {
    pub price: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roi {
    pub times: Option<f64>,
    pub currency: Option<String>,
    pub percentage: Option<f64>,
}

/// Row of `/coins/markets`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: Option<f64>,
    pub total_volume: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub ath: Option<f64>,
    pub ath_change_percentage: Option<f64>,
    pub ath_date: Option<String>,
    pub atl: Option<f64>,
    pub atl_change_percentage: Option<f64>,
    pub atl_date: Option<String>,
    pub roi: Option<Roi>,
    pub last_updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparkline_in_7d: Option<Sparkline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_1h_in_currency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_24h_in_currency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_14d_in_currency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_30d_in_currency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_200d_in_currency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_1y_in_currency: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinImage {
    pub thumb: Option<String>,
    pub small: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketData {
    pub current_price: CurrencyMap,
    pub market_cap: CurrencyMap,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: CurrencyMap,
    pub total_volume: CurrencyMap,
    pub high_24h: CurrencyMap,
    pub low_24h: CurrencyMap,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d: Option<f64>,
    pub price_change_percentage_30d: Option<f64>,
    pub price_change_percentage_1y: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,
    pub price_change_24h_in_currency: CurrencyMap,
    pub price_change_percentage_24h_in_currency: CurrencyMap,
    pub ath: CurrencyMap,
    pub ath_change_percentage: CurrencyMap,
    pub ath_date: BTreeMap<String, String>,
    pub atl: CurrencyMap,
    pub atl_change_percentage: CurrencyMap,
    pub atl_date: BTreeMap<String, String>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityData {
    pub facebook_likes: Option<u64>,
    pub twitter_followers: Option<u64>,
    pub reddit_subscribers: Option<u64>,
    pub reddit_average_posts_48h: Option<f64>,
    pub reddit_average_comments_48h: Option<f64>,
    pub telegram_channel_user_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeAdditionsDeletions {
    pub additions: Option<i64>,
    pub deletions: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeveloperData {
    pub forks: Option<u64>,
    pub stars: Option<u64>,
    pub subscribers: Option<u64>,
    pub total_issues: Option<u64>,
    pub closed_issues: Option<u64>,
    pub pull_requests_merged: Option<u64>,
    pub pull_request_contributors: Option<u64>,
    pub code_additions_deletions_4_weeks: Option<CodeAdditionsDeletions>,
    pub commit_count_4_weeks: Option<u64>,
}

/// `/coins/{id}` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinData {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub asset_platform_id: Option<String>,
    pub platforms: BTreeMap<String, Option<String>>,
    pub categories: Vec<Option<String>>,
    pub hashing_algorithm: Option<String>,
    pub localization: BTreeMap<String, String>,
    pub description: BTreeMap<String, String>,
    pub image: Option<CoinImage>,
    pub genesis_date: Option<String>,
    pub market_cap_rank: Option<u32>,
    pub market_data: Option<MarketData>,
    pub community_data: Option<CommunityData>,
    pub developer_data: Option<DeveloperData>,
    pub tickers: Vec<Ticker>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerMarket {
    pub name: String,
    pub identifier: String,
    pub has_trading_incentive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Spot ticker, shared by coin and exchange ticker endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticker {
    pub base: String,
    pub target: String,
    pub market: TickerMarket,
    pub last: Option<f64>,
    pub volume: Option<f64>,
    pub converted_last: CurrencyMap,
    pub converted_volume: CurrencyMap,
    pub cost_to_move_up_usd: Option<f64>,
    pub cost_to_move_down_usd: Option<f64>,
    pub trust_score: Option<String>,
    pub bid_ask_spread_percentage: Option<f64>,
    pub timestamp: Option<String>,
    pub last_traded_at: Option<String>,
    pub last_fetch_at: Option<String>,
    pub is_anomaly: bool,
    pub is_stale: bool,
    pub trade_url: Option<String>,
    pub token_info_url: Option<String>,
    pub coin_id: Option<String>,
    pub target_coin_id: Option<String>,
}

/// `/coins/{id}/tickers` and `/exchanges/{id}/tickers` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickersPage {
    pub name: String,
    pub tickers: Vec<Ticker>,
}

/// Snapshot returned by `/coins/{id}/history`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinHistory {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub localization: BTreeMap<String, String>,
    pub image: Option<CoinImage>,
    pub market_data: Option<MarketData>,
    pub community_data: Option<CommunityData>,
    pub developer_data: Option<DeveloperData>,
}

/// `[timestamp_ms, value]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint(
    pub f64,
    #[serde(deserialize_with = "serde_helpers::f64_lenient")] pub f64,
);

impl ChartPoint {
    pub fn timestamp_ms(&self) -> f64 {
        self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketChart {
    pub prices: Vec<ChartPoint>,
    pub market_caps: Vec<ChartPoint>,
    pub total_volumes: Vec<ChartPoint>,
}

/// `[timestamp_ms, open, high, low, close]`
pub type OhlcCandle = [f64; 5];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CirculatingSupplyChart {
    pub circulating_supply: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalSupplyChart {
    pub total_supply: Vec<ChartPoint>,
}

/// Market data block of a contract lookup; price changes are scalars here
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractMarketData {
    pub current_price: CurrencyMap,
    pub total_value_locked: Option<CurrencyMap>,
    pub market_cap: CurrencyMap,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: CurrencyMap,
    pub total_volume: CurrencyMap,
    pub high_24h: CurrencyMap,
    pub low_24h: CurrencyMap,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub ath: CurrencyMap,
    pub ath_change_percentage: CurrencyMap,
    pub ath_date: BTreeMap<String, String>,
    pub atl: CurrencyMap,
    pub atl_change_percentage: CurrencyMap,
    pub atl_date: BTreeMap<String, String>,
}

/// `/coins/{asset_platform_id}/contract/{contract_address}` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractCoin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub asset_platform_id: Option<String>,
    pub contract_address: Option<String>,
    pub market_data: Option<ContractMarketData>,
}
