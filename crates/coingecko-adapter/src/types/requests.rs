/*
[INPUT]:  Caller-supplied endpoint parameters
[OUTPUT]: Typed request descriptors with pre-flight validation and defaults
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{
    CategoriesOrder, CoinStatus, DerivativeTickersFilter, Locale, MarketsOrder, NftMarketsOrder,
    NftTickersOrder, PriceChangeWindow, TickersOrder, TreasuryCoin,
};
use super::validation::{
    Validate, ValidationError, check_range, require_items, require_text, require_timestamp,
};

/// Largest page size the provider accepts
pub const MAX_PER_PAGE: u32 = 250;
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const MIN_TOP_COINS: u32 = 300;
pub const MAX_TOP_COINS: u32 = 1000;
pub const MAX_CONTRACT_CHART_DAYS: u32 = 365;

/// Wire format of the history date parameter
pub const HISTORY_DATE_FORMAT: &str = "%d-%m-%Y";

fn check_pagination(per_page: Option<u32>, page: Option<u32>) -> Result<(), ValidationError> {
    check_range("per_page", per_page, Some(1), Some(i64::from(MAX_PER_PAGE)))?;
    check_range("page", page, Some(1), None)
}

fn check_time_range(from: i64, to: i64) -> Result<(), ValidationError> {
    require_timestamp("from", from)?;
    require_timestamp("to", to)
}

// ---------------------------------------------------------------------------
// simple
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplePriceRequest {
    pub ids: Vec<String>,
    pub vs_currencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_market_cap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_24hr_vol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_24hr_change: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_last_updated_at: Option<bool>,
    /// `full` or a decimal-place count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<String>,
}

impl SimplePriceRequest {
    pub fn new<I, V>(ids: I, vs_currencies: V) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            vs_currencies: vs_currencies.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl Validate for SimplePriceRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_items("ids", &self.ids)?;
        require_items("vs_currencies", &self.vs_currencies)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenPriceRequest {
    /// Asset platform id, e.g. `ethereum`
    pub id: String,
    pub contract_addresses: Vec<String>,
    pub vs_currencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_market_cap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_24hr_vol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_24hr_change: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_last_updated_at: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<String>,
}

impl TokenPriceRequest {
    pub fn new(
        id: impl Into<String>,
        contract_addresses: Vec<String>,
        vs_currencies: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            contract_addresses,
            vs_currencies,
            ..Self::default()
        }
    }
}

impl Validate for TokenPriceRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_items("contract_addresses", &self.contract_addresses)?;
        require_items("vs_currencies", &self.vs_currencies)
    }
}

// ---------------------------------------------------------------------------
// coins
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinsListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_platform: Option<bool>,
    /// Defaults to `active`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CoinStatus>,
}

impl Validate for CoinsListRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        self.status.get_or_insert(CoinStatus::Active);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopGainersLosersRequest {
    pub vs_currency: String,
    /// Defaults to `24h`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<PriceChangeWindow>,
    /// Market-cap rank cut-off, 300..=1000, defaults to 1000
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_coins: Option<u32>,
}

impl TopGainersLosersRequest {
    pub fn new(vs_currency: impl Into<String>) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            ..Self::default()
        }
    }
}

impl Validate for TopGainersLosersRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("vs_currency", &self.vs_currency)?;
        self.duration.get_or_insert(PriceChangeWindow::OneDay);
        self.top_coins.get_or_insert(MAX_TOP_COINS);
        check_range(
            "top_coins",
            self.top_coins,
            Some(i64::from(MIN_TOP_COINS)),
            Some(i64::from(MAX_TOP_COINS)),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinsMarketsRequest {
    pub vs_currency: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<MarketsOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub price_change_percentage: Vec<PriceChangeWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

impl CoinsMarketsRequest {
    pub fn new(vs_currency: impl Into<String>) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            ..Self::default()
        }
    }
}

impl Validate for CoinsMarketsRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("vs_currency", &self.vs_currency)?;
        self.order.get_or_insert(MarketsOrder::MarketCapDesc);
        self.per_page.get_or_insert(DEFAULT_PER_PAGE);
        self.page.get_or_insert(1);
        self.locale.get_or_insert(Locale::En);
        check_pagination(self.per_page, self.page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinDataRequest {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

impl CoinDataRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Validate for CoinDataRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinTickersRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exchange_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<TickersOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<bool>,
}

impl CoinTickersRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Validate for CoinTickersRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        check_range("page", self.page, Some(1), None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinHistoryRequest {
    pub id: String,
    /// Snapshot date, sent as `dd-mm-yyyy`
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localization: Option<bool>,
}

impl CoinHistoryRequest {
    pub fn new(id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            date,
            localization: None,
        }
    }

    pub fn wire_date(&self) -> String {
        self.date.format(HISTORY_DATE_FORMAT).to_string()
    }
}

impl Validate for CoinHistoryRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)
    }
}

/// Shared by `/coins/{id}/market_chart`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChartRequest {
    pub id: String,
    pub vs_currency: String,
    /// Number of days or `max`
    pub days: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<String>,
}

impl MarketChartRequest {
    pub fn new(
        id: impl Into<String>,
        vs_currency: impl Into<String>,
        days: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            days: days.into(),
            ..Self::default()
        }
    }
}

impl Validate for MarketChartRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_text("vs_currency", &self.vs_currency)?;
        require_text("days", &self.days)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChartRangeRequest {
    pub id: String,
    pub vs_currency: String,
    /// UNIX seconds
    pub from: i64,
    pub to: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<String>,
}

impl MarketChartRangeRequest {
    pub fn new(id: impl Into<String>, vs_currency: impl Into<String>, from: i64, to: i64) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            from,
            to,
            ..Self::default()
        }
    }
}

impl Validate for MarketChartRangeRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_text("vs_currency", &self.vs_currency)?;
        check_time_range(self.from, self.to)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OhlcRequest {
    pub id: String,
    pub vs_currency: String,
    pub days: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

impl OhlcRequest {
    pub fn new(
        id: impl Into<String>,
        vs_currency: impl Into<String>,
        days: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            days: days.into(),
            interval: None,
        }
    }
}

impl Validate for OhlcRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_text("vs_currency", &self.vs_currency)?;
        require_text("days", &self.days)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OhlcRangeRequest {
    pub id: String,
    pub vs_currency: String,
    pub from: i64,
    pub to: i64,
    /// `daily` or `hourly`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

impl OhlcRangeRequest {
    pub fn new(id: impl Into<String>, vs_currency: impl Into<String>, from: i64, to: i64) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            from,
            to,
            interval: None,
        }
    }
}

impl Validate for OhlcRangeRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_text("vs_currency", &self.vs_currency)?;
        check_time_range(self.from, self.to)
    }
}

/// Circulating or total supply history over a number of days
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplyChartRequest {
    pub id: String,
    pub days: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

impl SupplyChartRequest {
    pub fn new(id: impl Into<String>, days: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            days: days.into(),
            interval: None,
        }
    }
}

impl Validate for SupplyChartRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_text("days", &self.days)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplyChartRangeRequest {
    pub id: String,
    pub from: i64,
    pub to: i64,
}

impl SupplyChartRangeRequest {
    pub fn new(id: impl Into<String>, from: i64, to: i64) -> Self {
        Self {
            id: id.into(),
            from,
            to,
        }
    }
}

impl Validate for SupplyChartRangeRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        check_time_range(self.from, self.to)
    }
}

// ---------------------------------------------------------------------------
// contract
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractRequest {
    pub asset_platform_id: String,
    pub contract_address: String,
}

impl ContractRequest {
    pub fn new(asset_platform_id: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            asset_platform_id: asset_platform_id.into(),
            contract_address: contract_address.into(),
        }
    }
}

impl Validate for ContractRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("asset_platform_id", &self.asset_platform_id)?;
        require_text("contract_address", &self.contract_address)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractMarketChartRequest {
    pub asset_platform_id: String,
    pub contract_address: String,
    pub vs_currency: String,
    /// 1..=365
    pub days: u32,
}

impl ContractMarketChartRequest {
    pub fn new(contract: ContractRequest, vs_currency: impl Into<String>, days: u32) -> Self {
        Self {
            asset_platform_id: contract.asset_platform_id,
            contract_address: contract.contract_address,
            vs_currency: vs_currency.into(),
            days,
        }
    }
}

impl Validate for ContractMarketChartRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("asset_platform_id", &self.asset_platform_id)?;
        require_text("contract_address", &self.contract_address)?;
        require_text("vs_currency", &self.vs_currency)?;
        check_range(
            "days",
            Some(self.days),
            Some(1),
            Some(i64::from(MAX_CONTRACT_CHART_DAYS)),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractMarketChartRangeRequest {
    pub asset_platform_id: String,
    pub contract_address: String,
    pub vs_currency: String,
    pub from: i64,
    pub to: i64,
}

impl ContractMarketChartRangeRequest {
    pub fn new(contract: ContractRequest, vs_currency: impl Into<String>, from: i64, to: i64) -> Self {
        Self {
            asset_platform_id: contract.asset_platform_id,
            contract_address: contract.contract_address,
            vs_currency: vs_currency.into(),
            from,
            to,
        }
    }
}

impl Validate for ContractMarketChartRangeRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("asset_platform_id", &self.asset_platform_id)?;
        require_text("contract_address", &self.contract_address)?;
        require_text("vs_currency", &self.vs_currency)?;
        check_time_range(self.from, self.to)
    }
}

// ---------------------------------------------------------------------------
// asset platforms, categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenListRequest {
    pub asset_platform_id: String,
}

impl TokenListRequest {
    pub fn new(asset_platform_id: impl Into<String>) -> Self {
        Self {
            asset_platform_id: asset_platform_id.into(),
        }
    }
}

impl Validate for TokenListRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("asset_platform_id", &self.asset_platform_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<CategoriesOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage: Option<PriceChangeWindow>,
}

impl Validate for CategoriesRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        check_pagination(self.per_page, self.page)
    }
}

// ---------------------------------------------------------------------------
// exchanges, derivatives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Validate for ExchangesRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        check_pagination(self.per_page, self.page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRequest {
    pub id: String,
}

impl ExchangeRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Validate for ExchangeRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeTickersRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coin_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_exchange_logo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<TickersOrder>,
}

impl ExchangeTickersRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Validate for ExchangeTickersRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        check_range("page", self.page, Some(1), None)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeChartRequest {
    pub id: String,
    pub days: String,
}

impl VolumeChartRequest {
    pub fn new(id: impl Into<String>, days: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            days: days.into(),
        }
    }
}

impl Validate for VolumeChartRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_text("days", &self.days)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivativeExchangeRequest {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_tickers: Option<DerivativeTickersFilter>,
}

impl DerivativeExchangeRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            include_tickers: None,
        }
    }
}

impl Validate for DerivativeExchangeRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)
    }
}

// ---------------------------------------------------------------------------
// nfts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftRequest {
    pub id: String,
}

impl NftRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Validate for NftRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftContractRequest {
    pub asset_platform_id: String,
    pub contract_address: String,
}

impl NftContractRequest {
    pub fn new(asset_platform_id: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            asset_platform_id: asset_platform_id.into(),
            contract_address: contract_address.into(),
        }
    }
}

impl Validate for NftContractRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("asset_platform_id", &self.asset_platform_id)?;
        require_text("contract_address", &self.contract_address)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftMarketsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<NftMarketsOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<bool>,
}

impl Validate for NftMarketsRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        check_pagination(self.per_page, self.page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftHistoryRequest {
    pub id: String,
    pub vs_currency: String,
    pub days: String,
}

impl NftHistoryRequest {
    pub fn new(
        id: impl Into<String>,
        vs_currency: impl Into<String>,
        days: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            days: days.into(),
        }
    }
}

impl Validate for NftHistoryRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_text("vs_currency", &self.vs_currency)?;
        require_text("days", &self.days)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftContractHistoryRequest {
    pub asset_platform_id: String,
    pub contract_address: String,
    pub vs_currency: String,
    pub days: String,
}

impl NftContractHistoryRequest {
    pub fn new(
        contract: NftContractRequest,
        vs_currency: impl Into<String>,
        days: impl Into<String>,
    ) -> Self {
        Self {
            asset_platform_id: contract.asset_platform_id,
            contract_address: contract.contract_address,
            vs_currency: vs_currency.into(),
            days: days.into(),
        }
    }
}

impl Validate for NftContractHistoryRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("asset_platform_id", &self.asset_platform_id)?;
        require_text("contract_address", &self.contract_address)?;
        require_text("vs_currency", &self.vs_currency)?;
        require_text("days", &self.days)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftTickersRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exchange_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_exchange_logo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<NftTickersOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<bool>,
}

impl NftTickersRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Validate for NftTickersRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("id", &self.id)
    }
}

// ---------------------------------------------------------------------------
// search, global, companies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl Validate for SearchRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("query", &self.query)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalMarketCapChartRequest {
    pub vs_currency: String,
    pub days: String,
}

impl GlobalMarketCapChartRequest {
    pub fn new(vs_currency: impl Into<String>, days: impl Into<String>) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            days: days.into(),
        }
    }
}

impl Validate for GlobalMarketCapChartRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        require_text("vs_currency", &self.vs_currency)?;
        require_text("days", &self.days)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicTreasuryRequest {
    pub coin_id: TreasuryCoin,
}

impl PublicTreasuryRequest {
    pub fn new(coin_id: TreasuryCoin) -> Self {
        Self { coin_id }
    }
}

impl Validate for PublicTreasuryRequest {
    fn validate(&mut self) -> Result<(), ValidationError> {
        Ok(())
    }
}
