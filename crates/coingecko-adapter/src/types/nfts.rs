/*
[INPUT]:  JSON bodies from /nfts endpoints
[OUTPUT]: Typed NFT collection, market and history models
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::coins::{CurrencyMap, Sparkline};

/// Value quoted both in the collection's native currency and in USD
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeUsd {
    pub native_currency: Option<f64>,
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftImage {
    pub small: Option<String>,
    pub small_2x: Option<String>,
}

/// Row of `/nfts/list`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftListEntry {
    pub id: String,
    pub contract_address: Option<String>,
    pub asset_platform_id: Option<String>,
    pub name: String,
    pub symbol: String,
}

/// Collection detail from `/nfts/{id}` or the contract lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftCollection {
    pub id: String,
    pub contract_address: Option<String>,
    pub asset_platform_id: Option<String>,
    pub name: String,
    pub symbol: String,
    pub image: Option<NftImage>,
    pub description: Option<String>,
    pub native_currency: Option<String>,
    pub native_currency_symbol: Option<String>,
    pub floor_price: NativeUsd,
    pub market_cap: NativeUsd,
    pub volume_24h: NativeUsd,
    pub floor_price_in_usd_24h_percentage_change: Option<f64>,
    pub floor_price_24h_percentage_change: NativeUsd,
    pub market_cap_24h_percentage_change: NativeUsd,
    pub volume_24h_percentage_change: NativeUsd,
    pub number_of_unique_addresses: Option<u64>,
    pub number_of_unique_addresses_24h_percentage_change: Option<f64>,
    pub total_supply: Option<f64>,
    pub one_day_sales: Option<f64>,
    pub one_day_average_sale_price: Option<f64>,
}

/// Row of `/nfts/list/market_data`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftMarket {
    pub id: String,
    pub contract_address: Option<String>,
    pub asset_platform_id: Option<String>,
    pub name: String,
    pub symbol: String,
    pub image: Option<NftImage>,
    pub description: Option<String>,
    pub native_currency: Option<String>,
    pub native_currency_symbol: Option<String>,
    pub floor_price: NativeUsd,
    pub market_cap: NativeUsd,
    pub volume_24h: NativeUsd,
    pub floor_price_in_usd_24h_percentage_change: Option<f64>,
    pub number_of_unique_addresses: Option<u64>,
    pub total_supply: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparkline_in_7d: Option<Sparkline>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftMarketData {
    pub market_cap: CurrencyMap,
    pub market_cap_rank: Option<u32>,
    pub total_volume: CurrencyMap,
    pub floor_price: CurrencyMap,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftCommunityData {
    pub twitter_followers: Option<u64>,
    pub reddit_subscribers: Option<u64>,
    pub telegram_channel_user_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftDeveloperData {
    pub forks: Option<u64>,
    pub stars: Option<u64>,
    pub subscribers: Option<u64>,
    pub total_issues: Option<u64>,
    pub closed_issues: Option<u64>,
    pub pull_requests_merged: Option<u64>,
    pub pull_request_contributors: Option<u64>,
    pub commit_count_4_weeks: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftPublicInterestStats {
    pub alexa_rank: Option<u64>,
    pub bing_matches: Option<u64>,
}

/// `/nfts/{id}/history` and its contract variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftHistory {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: Option<NftImage>,
    pub market_data: Option<NftMarketData>,
    pub community_data: Option<NftCommunityData>,
    pub developer_data: Option<NftDeveloperData>,
    pub public_interest_stats: Option<NftPublicInterestStats>,
}

/// Marketplace listing of one collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftTicker {
    pub floor_price_in_native_currency: Option<f64>,
    pub h24_volume_in_native_currency: Option<f64>,
    pub native_currency: Option<String>,
    pub native_currency_symbol: Option<String>,
    pub updated_at: Option<String>,
    pub nft_marketplace_id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub nft_collection_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftTickers {
    pub tickers: Vec<NftTicker>,
}
