/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod asset_platforms;
pub mod categories;
pub mod client;
pub mod coins;
pub mod companies;
pub mod contract;
pub mod derivatives;
pub mod error;
pub mod exchange_rates;
pub mod exchanges;
pub mod global;
pub mod key;
pub mod nfts;
pub mod params;
pub mod ping;
pub mod search;
pub mod simple;
pub mod transport;
pub mod trending;

pub use error::{GeckoError, Result};
pub use params::{PathParams, QueryParams};
pub use transport::{API_KEY_HEADER, Transport};

pub use client::{ClientConfig, CoinGeckoClient, DEFAULT_BASE_URL};

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use wiremock::MockServer;

    use super::{ClientConfig, Transport};

    /// Transport aimed at a mock server, without retries
    pub(crate) fn mock_transport(server: &MockServer) -> Transport {
        let config = ClientConfig::default()
            .with_base_url(server.uri())
            .with_retry_count(0)
            .with_retry_wait(Duration::from_millis(1));
        Transport::new(&config).expect("transport init")
    }
}
