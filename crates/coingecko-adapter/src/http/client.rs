/*
[INPUT]:  HTTP configuration (base URL, timeouts, retry policy, API key)
[OUTPUT]: Configured CoinGecko client exposing one facade per resource group
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or new resource groups
*/

use std::fmt;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::http::asset_platforms::AssetPlatformsApi;
use crate::http::categories::CategoriesApi;
use crate::http::coins::CoinsApi;
use crate::http::companies::CompaniesApi;
use crate::http::contract::ContractApi;
use crate::http::derivatives::DerivativesApi;
use crate::http::exchange_rates::ExchangeRatesApi;
use crate::http::exchanges::ExchangesApi;
use crate::http::global::GlobalApi;
use crate::http::key::KeyApi;
use crate::http::nfts::NftsApi;
use crate::http::ping::PingApi;
use crate::http::search::SearchApi;
use crate::http::simple::SimpleApi;
use crate::http::transport::Transport;
use crate::http::trending::TrendingApi;
use crate::http::Result;
use crate::types::Ping;

/// Public API root
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// HTTP client configuration
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Additional attempts after the first one
    pub retry_count: u32,
    pub retry_wait: Duration,
    /// Sent as `x-cg-pro-api-key` when present
    pub api_key: Option<String>,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
            retry_count: 3,
            retry_wait: Duration::from_secs(1),
            api_key: None,
            user_agent: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("retry_count", &self.retry_count)
            .field("retry_wait", &self.retry_wait)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    pub fn with_retry_wait(mut self, retry_wait: Duration) -> Self {
        self.retry_wait = retry_wait;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Main HTTP client for the CoinGecko API.
///
/// Facades borrow the shared transport; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    transport: Transport,
}

impl CoinGeckoClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(&config)?,
        })
    }

    /// Create a client on top of a caller-prepared reqwest builder
    pub fn with_builder(config: ClientConfig, builder: ClientBuilder) -> Result<Self> {
        Ok(Self {
            transport: Transport::with_builder(&config, builder)?,
        })
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Server status check
    pub async fn ping(&self) -> Result<Ping> {
        self.ping_api().ping().await
    }

    pub fn ping_api(&self) -> PingApi<'_> {
        PingApi::new(&self.transport)
    }

    pub fn key(&self) -> KeyApi<'_> {
        KeyApi::new(&self.transport)
    }

    pub fn simple(&self) -> SimpleApi<'_> {
        SimpleApi::new(&self.transport)
    }

    pub fn coins(&self) -> CoinsApi<'_> {
        CoinsApi::new(&self.transport)
    }

    pub fn contract(&self) -> ContractApi<'_> {
        ContractApi::new(&self.transport)
    }

    pub fn asset_platforms(&self) -> AssetPlatformsApi<'_> {
        AssetPlatformsApi::new(&self.transport)
    }

    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(&self.transport)
    }

    pub fn exchanges(&self) -> ExchangesApi<'_> {
        ExchangesApi::new(&self.transport)
    }

    pub fn derivatives(&self) -> DerivativesApi<'_> {
        DerivativesApi::new(&self.transport)
    }

    pub fn nfts(&self) -> NftsApi<'_> {
        NftsApi::new(&self.transport)
    }

    pub fn exchange_rates(&self) -> ExchangeRatesApi<'_> {
        ExchangeRatesApi::new(&self.transport)
    }

    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(&self.transport)
    }

    pub fn trending(&self) -> TrendingApi<'_> {
        TrendingApi::new(&self.transport)
    }

    pub fn global(&self) -> GlobalApi<'_> {
        GlobalApi::new(&self.transport)
    }

    pub fn companies(&self) -> CompaniesApi<'_> {
        CompaniesApi::new(&self.transport)
    }
}
