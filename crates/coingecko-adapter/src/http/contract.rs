/*
[INPUT]:  Asset platform id and token contract address
[OUTPUT]: Coin detail and market charts of a token resolved by contract
[POS]:    HTTP layer - /coins/{asset_platform_id}/contract endpoints
[UPDATE]: When contract lookups change
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::{
    ContractCoin, ContractMarketChartRangeRequest, ContractMarketChartRequest, ContractRequest,
    MarketChart, Validate,
};

const CONTRACT_PATH: &str = "/coins/{asset_platform_id}/contract/{contract_address}";
const CONTRACT_CHART_PATH: &str =
    "/coins/{asset_platform_id}/contract/{contract_address}/market_chart";
const CONTRACT_CHART_RANGE_PATH: &str =
    "/coins/{asset_platform_id}/contract/{contract_address}/market_chart/range";

pub struct ContractApi<'a> {
    transport: &'a Transport,
}

impl<'a> ContractApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// GET /coins/{asset_platform_id}/contract/{contract_address}
    pub async fn coin(&self, mut request: ContractRequest) -> Result<ContractCoin> {
        request.validate()?;
        let path_params = [
            ("asset_platform_id", request.asset_platform_id.as_str()),
            ("contract_address", request.contract_address.as_str()),
        ];
        self.transport
            .get(CONTRACT_PATH, &path_params, QueryParams::new())
            .await
    }

    /// Historical chart of a token, `days` within 1..=365
    ///
    /// GET /coins/{asset_platform_id}/contract/{contract_address}/market_chart
    pub async fn market_chart(&self, mut request: ContractMarketChartRequest) -> Result<MarketChart> {
        request.validate()?;
        let path_params = [
            ("asset_platform_id", request.asset_platform_id.as_str()),
            ("contract_address", request.contract_address.as_str()),
        ];
        let query = QueryParams::new()
            .required("vs_currency", &request.vs_currency)
            .required("days", request.days);
        self.transport.get(CONTRACT_CHART_PATH, &path_params, query).await
    }

    /// GET /coins/{asset_platform_id}/contract/{contract_address}/market_chart/range
    pub async fn market_chart_range(
        &self,
        mut request: ContractMarketChartRangeRequest,
    ) -> Result<MarketChart> {
        request.validate()?;
        let path_params = [
            ("asset_platform_id", request.asset_platform_id.as_str()),
            ("contract_address", request.contract_address.as_str()),
        ];
        let query = QueryParams::new()
            .required("vs_currency", &request.vs_currency)
            .required("from", request.from)
            .required("to", request.to);
        self.transport
            .get(CONTRACT_CHART_RANGE_PATH, &path_params, query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::mock_transport;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const USDT: &str = "0xdac17f958d2ee523a2206206994597c13d831ec7";

    #[tokio::test]
    async fn test_contract_coin() {
        let server = MockServer::start().await;
        let body = r#"{
            "id": "tether",
            "symbol": "usdt",
            "name": "Tether",
            "asset_platform_id": "ethereum",
            "contract_address": "0xdac17f958d2ee523a2206206994597c13d831ec7",
            "market_data": {
                "current_price": {"usd": 1.0},
                "price_change_percentage_24h": -0.01,
                "market_cap_rank": 3
            }
        }"#;
        Mock::given(method("GET"))
            .and(path(format!("/coins/ethereum/contract/{USDT}")))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let coin = ContractApi::new(&transport)
            .coin(ContractRequest::new("ethereum", USDT))
            .await
            .expect("contract coin failed");

        assert_eq!(coin.id, "tether");
        let market_data = coin.market_data.expect("market_data");
        assert_eq!(market_data.market_cap_rank, Some(3));
        assert_eq!(market_data.price_change_percentage_24h, Some(-0.01));
    }

    #[tokio::test]
    async fn test_contract_market_chart() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/coins/ethereum/contract/{USDT}/market_chart")))
            .and(query_param("vs_currency", "usd"))
            .and(query_param("days", "30"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"prices":[[1711843200000,1.0004]],"market_caps":[],"total_volumes":[]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let request = ContractMarketChartRequest::new(ContractRequest::new("ethereum", USDT), "usd", 30);
        let chart = ContractApi::new(&transport)
            .market_chart(request)
            .await
            .expect("contract market_chart failed");
        assert_eq!(chart.prices[0].value(), 1.0004);
    }

    #[tokio::test]
    async fn test_contract_market_chart_rejects_days() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let request = ContractMarketChartRequest::new(ContractRequest::new("ethereum", USDT), "usd", 400);
        let err = ContractApi::new(&transport).market_chart(request).await.unwrap_err();
        assert!(err.is_validation_error());
    }

    #[tokio::test]
    async fn test_contract_market_chart_range() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/coins/ethereum/contract/{USDT}/market_chart/range")))
            .and(query_param("from", "1711929600"))
            .and(query_param("to", "1712275200"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"prices":[]}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let request = ContractMarketChartRangeRequest::new(
            ContractRequest::new("ethereum", USDT),
            "usd",
            1711929600,
            1712275200,
        );
        let chart = ContractApi::new(&transport)
            .market_chart_range(request)
            .await
            .expect("contract market_chart_range failed");
        assert!(chart.prices.is_empty());
    }
}
