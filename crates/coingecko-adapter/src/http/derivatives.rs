/*
[INPUT]:  Derivative exchange ids and ticker filters
[OUTPUT]: Derivative tickers and derivative exchange data
[POS]:    HTTP layer - /derivatives endpoints
[UPDATE]: When derivative endpoints change
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::{
    DerivativeExchange, DerivativeExchangeDetail, DerivativeExchangeRequest, DerivativeTicker,
    IdName, Validate,
};

pub struct DerivativesApi<'a> {
    transport: &'a Transport,
}

impl<'a> DerivativesApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// GET /derivatives
    pub async fn tickers(&self) -> Result<Vec<DerivativeTicker>> {
        self.transport.get("/derivatives", &[], QueryParams::new()).await
    }

    /// GET /derivatives/exchanges
    pub async fn exchanges(&self) -> Result<Vec<DerivativeExchange>> {
        self.transport
            .get("/derivatives/exchanges", &[], QueryParams::new())
            .await
    }

    /// One derivative exchange, optionally with its tickers
    ///
    /// GET /derivatives/exchanges/{id}
    pub async fn exchange(
        &self,
        mut request: DerivativeExchangeRequest,
    ) -> Result<DerivativeExchangeDetail> {
        request.validate()?;
        let query = QueryParams::new().optional("include_tickers", request.include_tickers);
        self.transport
            .get(
                "/derivatives/exchanges/{id}",
                &[("id", request.id.as_str())],
                query,
            )
            .await
    }

    /// GET /derivatives/exchanges/list
    pub async fn exchanges_id_map(&self) -> Result<Vec<IdName>> {
        self.transport
            .get("/derivatives/exchanges/list", &[], QueryParams::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::mock_transport;
    use crate::types::DerivativeTickersFilter;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_tickers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/derivatives"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"market":"Deepcoin (Derivatives)","symbol":"ETHUSDT","price":"3395.91","contract_type":"perpetual","expired_at":null}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let tickers = DerivativesApi::new(&transport).tickers().await.expect("tickers failed");
        assert_eq!(tickers[0].price, Some(3395.91));
    }

    #[tokio::test]
    async fn test_exchanges() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/derivatives/exchanges"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"name":"Binance (Futures)","id":"binance_futures","open_interest_btc":279958.61,"trade_volume_24h_btc":"574366.94"}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let exchanges = DerivativesApi::new(&transport)
            .exchanges()
            .await
            .expect("exchanges failed");
        assert_eq!(exchanges[0].id.as_deref(), Some("binance_futures"));
        assert_eq!(exchanges[0].trade_volume_24h_btc, Some(574366.94));
    }

    #[tokio::test]
    async fn test_exchange_with_tickers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/derivatives/exchanges/binance_futures"))
            .and(query_param("include_tickers", "unexpired"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"name":"Binance (Futures)","tickers":[{"symbol":"1000BONKUSDT","base":"1000BONK","target":"USDT","last":0.023}]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let request = DerivativeExchangeRequest {
            include_tickers: Some(DerivativeTickersFilter::Unexpired),
            ..DerivativeExchangeRequest::new("binance_futures")
        };
        let detail = DerivativesApi::new(&transport)
            .exchange(request)
            .await
            .expect("exchange failed");
        assert_eq!(detail.exchange.name, "Binance (Futures)");
        assert_eq!(detail.tickers.len(), 1);
    }

    #[tokio::test]
    async fn test_exchange_without_tickers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/derivatives/exchanges/bitmex"))
            .and(query_param_is_missing("include_tickers"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"name":"BitMEX (Derivative)"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let detail = DerivativesApi::new(&transport)
            .exchange(DerivativeExchangeRequest::new("bitmex"))
            .await
            .expect("exchange failed");
        assert!(detail.tickers.is_empty());
    }

    #[tokio::test]
    async fn test_exchanges_id_map() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/derivatives/exchanges/list"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"id":"binance_futures","name":"Binance (Futures)"}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let ids = DerivativesApi::new(&transport)
            .exchanges_id_map()
            .await
            .expect("exchanges_id_map failed");
        assert_eq!(ids[0].id, "binance_futures");
    }
}
