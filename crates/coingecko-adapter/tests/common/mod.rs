/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for coingecko-adapter tests

use std::time::Duration;

use coingecko_adapter::{ClientConfig, CoinGeckoClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Config aimed at the mock server with a short retry wait
pub fn mock_config(server: &MockServer, retry_count: u32) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(server.uri())
        .with_retry_count(retry_count)
        .with_retry_wait(Duration::from_millis(10))
}

/// Client aimed at the mock server without retries
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> CoinGeckoClient {
    CoinGeckoClient::with_config(mock_config(server, 0)).expect("client init")
}
