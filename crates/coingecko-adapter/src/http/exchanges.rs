/*
[INPUT]:  Exchange ids and exchange request descriptors
[OUTPUT]: Exchange listings, detail, tickers and BTC volume charts
[POS]:    HTTP layer - /exchanges endpoints
[UPDATE]: When exchange endpoints change
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::{
    Exchange, ExchangeDetail, ExchangeRequest, ExchangeTickersRequest, ExchangesRequest, IdName,
    TickersPage, Validate, VolumeChart, VolumeChartRequest,
};

pub struct ExchangesApi<'a> {
    transport: &'a Transport,
}

impl<'a> ExchangesApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Active exchanges with trading volume
    ///
    /// GET /exchanges
    pub async fn list(&self, mut request: ExchangesRequest) -> Result<Vec<Exchange>> {
        request.validate()?;
        let query = QueryParams::new()
            .optional("per_page", request.per_page)
            .optional("page", request.page);
        self.transport.get("/exchanges", &[], query).await
    }

    /// GET /exchanges/list
    pub async fn id_map(&self) -> Result<Vec<IdName>> {
        self.transport.get("/exchanges/list", &[], QueryParams::new()).await
    }

    /// GET /exchanges/{id}
    pub async fn exchange(&self, mut request: ExchangeRequest) -> Result<ExchangeDetail> {
        request.validate()?;
        self.transport
            .get(
                "/exchanges/{id}",
                &[("id", request.id.as_str())],
                QueryParams::new(),
            )
            .await
    }

    /// Paginated tickers of one exchange
    ///
    /// GET /exchanges/{id}/tickers
    pub async fn tickers(&self, mut request: ExchangeTickersRequest) -> Result<TickersPage> {
        request.validate()?;
        let query = QueryParams::new()
            .list("coin_ids", &request.coin_ids)
            .flag("include_exchange_logo", request.include_exchange_logo)
            .optional("page", request.page)
            .flag("depth", request.depth)
            .optional("order", request.order);
        self.transport
            .get("/exchanges/{id}/tickers", &[("id", request.id.as_str())], query)
            .await
    }

    /// GET /exchanges/{id}/volume_chart?days={days}
    pub async fn volume_chart(&self, mut request: VolumeChartRequest) -> Result<VolumeChart> {
        request.validate()?;
        let query = QueryParams::new().required("days", &request.days);
        self.transport
            .get(
                "/exchanges/{id}/volume_chart",
                &[("id", request.id.as_str())],
                query,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::mock_transport;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_paging() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exchanges"))
            .and(query_param("per_page", "2"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"id":"bybit_spot","name":"Bybit","year_established":2018,"country":"British Virgin Islands","trust_score":10,"trust_score_rank":1,"trade_volume_24h_btc":51075.62,"trade_volume_24h_btc_normalized":47765.58}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let request = ExchangesRequest {
            per_page: Some(2),
            page: Some(1),
        };
        let exchanges = ExchangesApi::new(&transport).list(request).await.expect("list failed");

        assert_eq!(exchanges[0].id, "bybit_spot");
        assert_eq!(exchanges[0].trust_score, Some(10));
        assert_eq!(exchanges[0].trade_volume_24h_btc, Some(51075.62));
    }

    #[tokio::test]
    async fn test_id_map() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exchanges/list"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"id":"10kswap-starknet-alpha","name":"10KSwap"},{"id":"1bch","name":"1BCH"}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let ids = ExchangesApi::new(&transport).id_map().await.expect("id_map failed");
        assert_eq!(
            ids[1],
            IdName {
                id: "1bch".to_string(),
                name: "1BCH".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_tickers_logo_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exchanges/binance/tickers"))
            .and(query_param("coin_ids", "bitcoin,ethereum"))
            .and(query_param("include_exchange_logo", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"name":"Binance","tickers":[{"base":"BTC","target":"USDT","market":{"name":"Binance","identifier":"binance","logo":"https://assets.coingecko.com/markets/images/52/small/binance.jpg"},"last":69476}]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let request = ExchangeTickersRequest {
            coin_ids: vec!["bitcoin".to_string(), "ethereum".to_string()],
            include_exchange_logo: Some(true),
            ..ExchangeTickersRequest::new("binance")
        };
        let page = ExchangesApi::new(&transport).tickers(request).await.expect("tickers failed");
        assert!(page.tickers[0].market.logo.is_some());
    }

    #[tokio::test]
    async fn test_volume_chart() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exchanges/binance/volume_chart"))
            .and(query_param("days", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[[1711792200000.0,"306800.0517941"]]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let chart = ExchangesApi::new(&transport)
            .volume_chart(VolumeChartRequest::new("binance", "1"))
            .await
            .expect("volume_chart failed");
        assert_eq!(chart[0].value(), 306800.0517941);
    }
}
