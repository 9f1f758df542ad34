/*
[INPUT]:  JSON bodies from service, platform, category, search and global endpoints
[OUTPUT]: Typed market-wide models
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::coins::{ChartPoint, CurrencyMap};

/// `/ping` body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ping {
    pub gecko_says: String,
}

/// `/key` body; usage of the configured API key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeyUsage {
    pub plan: String,
    pub rate_limit_request_per_minute: u64,
    pub monthly_call_credit: u64,
    pub current_total_monthly_calls: u64,
    pub current_remaining_monthly_calls: u64,
}

/// Identifier that is numeric on some endpoints and textual on others
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Numeric(u64),
    Text(String),
}

impl Default for Identifier {
    fn default() -> Self {
        Identifier::Text(String::new())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(id) => write!(f, "{id}"),
            Identifier::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPlatform {
    pub id: String,
    pub chain_identifier: Option<i64>,
    pub name: String,
    pub shortname: Option<String>,
    pub native_coin_id: Option<String>,
}

/// Token listed under an asset platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformToken {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub contract_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryId {
    pub category_id: String,
    pub name: String,
}

/// Row of `/coins/categories`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryMarket {
    pub id: String,
    pub name: String,
    pub market_cap: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub content: Option<String>,
    pub top_3_coins_id: Vec<String>,
    pub top_3_coins: Vec<String>,
    pub volume_24h: Option<f64>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeRate {
    pub name: String,
    pub unit: String,
    pub value: f64,
    /// `crypto`, `fiat` or `commodity`
    #[serde(rename = "type")]
    pub kind: String,
}

/// `/exchange_rates` body, BTC-denominated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeRates {
    pub rates: BTreeMap<String, ExchangeRate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCoin {
    pub id: String,
    pub name: String,
    pub api_symbol: Option<String>,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumb: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchExchange {
    pub id: String,
    pub name: String,
    pub market_type: Option<String>,
    pub thumb: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCategory {
    pub id: Identifier,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchNft {
    pub id: String,
    pub name: String,
    pub symbol: Option<String>,
    pub thumb: Option<String>,
}

/// `/search` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    pub coins: Vec<SearchCoin>,
    pub exchanges: Vec<SearchExchange>,
    pub categories: Vec<SearchCategory>,
    pub nfts: Vec<SearchNft>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingCoinItem {
    pub id: String,
    pub coin_id: Option<u64>,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumb: Option<String>,
    pub small: Option<String>,
    pub large: Option<String>,
    pub slug: Option<String>,
    pub price_btc: Option<f64>,
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingCoin {
    pub item: TrendingCoinItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingNft {
    pub id: String,
    pub name: String,
    pub symbol: Option<String>,
    pub thumb: Option<String>,
    pub nft_contract_id: Option<u64>,
    pub native_currency_symbol: Option<String>,
    pub floor_price_in_native_currency: Option<f64>,
    pub floor_price_24h_percentage_change: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingCategory {
    pub id: Identifier,
    pub name: String,
    pub market_cap_1h_change: Option<f64>,
    pub slug: Option<String>,
    pub coins_count: Option<u64>,
}

/// `/search/trending` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trending {
    pub coins: Vec<TrendingCoin>,
    pub nfts: Vec<TrendingNft>,
    pub categories: Vec<TrendingCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalData {
    pub active_cryptocurrencies: u64,
    pub upcoming_icos: u64,
    pub ongoing_icos: u64,
    pub ended_icos: u64,
    pub markets: u64,
    pub total_market_cap: CurrencyMap,
    pub total_volume: CurrencyMap,
    pub market_cap_percentage: CurrencyMap,
    pub market_cap_change_percentage_24h_usd: Option<f64>,
    pub updated_at: i64,
}

/// `/global` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Global {
    pub data: GlobalData,
}

/// DeFi aggregates; the provider sends these decimals as strings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalDefiData {
    pub defi_market_cap: Option<String>,
    pub eth_market_cap: Option<String>,
    pub defi_to_eth_ratio: Option<String>,
    pub trading_volume_24h: Option<String>,
    pub defi_dominance: Option<String>,
    pub top_coin_name: Option<String>,
    pub top_coin_defi_dominance: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalDefi {
    pub data: GlobalDefiData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketCapChartSeries {
    pub market_cap: Vec<ChartPoint>,
    pub volume: Vec<ChartPoint>,
}

/// `/global/market_cap_chart` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalMarketCapChart {
    pub market_cap_chart: MarketCapChartSeries,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreasuryCompany {
    pub name: String,
    pub symbol: String,
    pub country: Option<String>,
    pub total_holdings: f64,
    pub total_entry_value_usd: Option<f64>,
    pub total_current_value_usd: Option<f64>,
    pub percentage_of_total_supply: Option<f64>,
}

/// `/companies/public_treasury/{coin_id}` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicTreasury {
    pub total_holdings: f64,
    pub total_value_usd: f64,
    pub market_cap_dominance: f64,
    pub companies: Vec<TreasuryCompany>,
}
