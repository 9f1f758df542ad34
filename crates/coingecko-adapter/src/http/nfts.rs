/*
[INPUT]:  NFT collection ids, contract addresses and NFT request descriptors
[OUTPUT]: NFT collections, market rows, history series and marketplace tickers
[POS]:    HTTP layer - /nfts endpoints
[UPDATE]: When NFT endpoints change
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::{
    NftCollection, NftContractHistoryRequest, NftContractRequest, NftHistory, NftHistoryRequest,
    NftListEntry, NftMarket, NftMarketsRequest, NftRequest, NftTickers, NftTickersRequest,
    Validate,
};

pub struct NftsApi<'a> {
    transport: &'a Transport,
}

impl<'a> NftsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// GET /nfts/list
    pub async fn list(&self) -> Result<Vec<NftListEntry>> {
        self.transport.get("/nfts/list", &[], QueryParams::new()).await
    }

    /// GET /nfts/{id}
    pub async fn nft(&self, mut request: NftRequest) -> Result<NftCollection> {
        request.validate()?;
        self.transport
            .get("/nfts/{id}", &[("id", request.id.as_str())], QueryParams::new())
            .await
    }

    /// GET /nfts/{asset_platform_id}/contract/{contract_address}
    pub async fn nft_by_contract(&self, mut request: NftContractRequest) -> Result<NftCollection> {
        request.validate()?;
        let path_params = [
            ("asset_platform_id", request.asset_platform_id.as_str()),
            ("contract_address", request.contract_address.as_str()),
        ];
        self.transport
            .get(
                "/nfts/{asset_platform_id}/contract/{contract_address}",
                &path_params,
                QueryParams::new(),
            )
            .await
    }

    /// GET /nfts/list/market_data
    pub async fn markets(&self, mut request: NftMarketsRequest) -> Result<Vec<NftMarket>> {
        request.validate()?;
        let query = QueryParams::new()
            .optional("order", request.order)
            .optional("per_page", request.per_page)
            .optional("page", request.page)
            .flag("sparkline", request.sparkline);
        self.transport.get("/nfts/list/market_data", &[], query).await
    }

    /// GET /nfts/{id}/history
    pub async fn history(&self, mut request: NftHistoryRequest) -> Result<NftHistory> {
        request.validate()?;
        let query = QueryParams::new()
            .required("vs_currency", &request.vs_currency)
            .required("days", &request.days);
        self.transport
            .get("/nfts/{id}/history", &[("id", request.id.as_str())], query)
            .await
    }

    /// GET /nfts/{asset_platform_id}/contract/{contract_address}/history
    pub async fn contract_history(&self, mut request: NftContractHistoryRequest) -> Result<NftHistory> {
        request.validate()?;
        let path_params = [
            ("asset_platform_id", request.asset_platform_id.as_str()),
            ("contract_address", request.contract_address.as_str()),
        ];
        let query = QueryParams::new()
            .required("vs_currency", &request.vs_currency)
            .required("days", &request.days);
        self.transport
            .get(
                "/nfts/{asset_platform_id}/contract/{contract_address}/history",
                &path_params,
                query,
            )
            .await
    }

    /// Floor price and volume per marketplace
    ///
    /// GET /nfts/{id}/tickers
    pub async fn tickers(&self, mut request: NftTickersRequest) -> Result<NftTickers> {
        request.validate()?;
        let query = QueryParams::new()
            .list("exchange_ids", &request.exchange_ids)
            .flag("include_exchange_logo", request.include_exchange_logo)
            .optional("order", request.order)
            .flag("depth", request.depth);
        self.transport
            .get("/nfts/{id}/tickers", &[("id", request.id.as_str())], query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::mock_transport;
    use crate::types::NftMarketsOrder;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PUDGY: &str = "0xBd3531dA5CF5857e7CfAA92426877b022e612cf8";

    fn json(body: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json")
    }

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/nfts/list"))
            .respond_with(json(
                r#"[{"id":"bored-ape-yacht-club","contract_address":"0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d","name":"Bored Ape Yacht Club","asset_platform_id":"ethereum","symbol":"BAYC"}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let nfts = NftsApi::new(&transport).list().await.expect("list failed");
        assert_eq!(nfts[0].symbol, "BAYC");
        assert_eq!(nfts[0].asset_platform_id.as_deref(), Some("ethereum"));
    }

    #[tokio::test]
    async fn test_nft_and_contract_lookup() {
        let server = MockServer::start().await;
        let body = r#"{"id":"pudgy-penguins","name":"Pudgy Penguins","symbol":"PPG","floor_price":{"native_currency":12.17,"usd":44360}}"#;
        Mock::given(method("GET"))
            .and(path("/nfts/pudgy-penguins"))
            .respond_with(json(body))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/nfts/ethereum/contract/{PUDGY}")))
            .respond_with(json(body))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let api = NftsApi::new(&transport);

        let by_id = api.nft(NftRequest::new("pudgy-penguins")).await.expect("nft failed");
        let by_contract = api
            .nft_by_contract(NftContractRequest::new("ethereum", PUDGY))
            .await
            .expect("nft_by_contract failed");

        assert_eq!(by_id, by_contract);
        assert_eq!(by_id.floor_price.usd, Some(44360.0));
    }

    #[tokio::test]
    async fn test_markets() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/nfts/list/market_data"))
            .and(query_param("order", "market_cap_desc"))
            .and(query_param("per_page", "10"))
            .respond_with(json(
                r#"[{"id":"pudgy-penguins","name":"Pudgy Penguins","symbol":"PPG","market_cap":{"native_currency":108211,"usd":394267328}}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let request = NftMarketsRequest {
            order: Some(NftMarketsOrder::MarketCapDesc),
            per_page: Some(10),
            ..NftMarketsRequest::default()
        };
        let markets = NftsApi::new(&transport).markets(request).await.expect("markets failed");
        assert_eq!(markets[0].market_cap.usd, Some(394267328.0));
    }

    #[tokio::test]
    async fn test_history_and_contract_history() {
        let server = MockServer::start().await;
        let body = r#"{"id":"pudgy-penguins","symbol":"PPG","name":"Pudgy Penguins","market_data":{"floor_price":{"usd":44360},"market_cap_rank":1}}"#;
        Mock::given(method("GET"))
            .and(path("/nfts/pudgy-penguins/history"))
            .and(query_param("vs_currency", "usd"))
            .and(query_param("days", "14"))
            .respond_with(json(body))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/nfts/ethereum/contract/{PUDGY}/history")))
            .and(query_param("days", "14"))
            .respond_with(json(body))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let api = NftsApi::new(&transport);

        let history = api
            .history(NftHistoryRequest::new("pudgy-penguins", "usd", "14"))
            .await
            .expect("history failed");
        let market_data = history.market_data.clone().expect("market_data");
        assert_eq!(market_data.floor_price.get("usd"), Some(&44360.0));

        let contract_history = api
            .contract_history(NftContractHistoryRequest::new(
                NftContractRequest::new("ethereum", PUDGY),
                "usd",
                "14",
            ))
            .await
            .expect("contract_history failed");
        assert_eq!(contract_history, history);
    }

    #[tokio::test]
    async fn test_tickers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/nfts/pudgy-penguins/tickers"))
            .respond_with(json(
                r#"{"tickers":[{"floor_price_in_native_currency":12.17,"h24_volume_in_native_currency":402.37,"native_currency":"ethereum","native_currency_symbol":"ETH","updated_at":"2024-04-08T15:36:00.225Z","nft_marketplace_id":"blur","name":"Blur"}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let tickers = NftsApi::new(&transport)
            .tickers(NftTickersRequest::new("pudgy-penguins"))
            .await
            .expect("tickers failed");
        assert_eq!(tickers.tickers[0].nft_marketplace_id, "blur");
        assert_eq!(tickers.tickers[0].floor_price_in_native_currency, Some(12.17));
    }
}
