/*
[INPUT]:  Category ordering and paging options
[OUTPUT]: Category ids and per-category market aggregates
[POS]:    HTTP layer - /coins/categories endpoints
[UPDATE]: When category endpoints change
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::{CategoriesRequest, CategoryId, CategoryMarket, Validate};

pub struct CategoriesApi<'a> {
    transport: &'a Transport,
}

impl<'a> CategoriesApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// GET /coins/categories/list
    pub async fn list(&self) -> Result<Vec<CategoryId>> {
        self.transport
            .get("/coins/categories/list", &[], QueryParams::new())
            .await
    }

    /// Categories with market cap, volume and top coins
    ///
    /// GET /coins/categories
    pub async fn markets(&self, mut request: CategoriesRequest) -> Result<Vec<CategoryMarket>> {
        request.validate()?;
        let query = QueryParams::new()
            .optional("order", request.order)
            .optional("per_page", request.per_page)
            .optional("page", request.page)
            .flag("sparkline", request.sparkline)
            .optional("price_change_percentage", request.price_change_percentage);
        self.transport.get("/coins/categories", &[], query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoriesOrder;
    use crate::http::test_support::mock_transport;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/categories/list"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"category_id":"aave-tokens","name":"Aave Tokens"}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let categories = CategoriesApi::new(&transport).list().await.expect("list failed");
        assert_eq!(
            categories,
            vec![CategoryId {
                category_id: "aave-tokens".to_string(),
                name: "Aave Tokens".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_markets_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/categories"))
            .and(query_param("order", "market_cap_change_24h_desc"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"id":"layer-1","name":"Layer 1 (L1)","market_cap":2061406861196.14,"market_cap_change_24h":-0.66,"top_3_coins_id":["bitcoin","ethereum","binancecoin"],"volume_24h":61146432400.17,"updated_at":"2024-04-06T08:25:46.402Z"}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let request = CategoriesRequest {
            order: Some(CategoriesOrder::MarketCapChange24hDesc),
            ..CategoriesRequest::default()
        };
        let markets = CategoriesApi::new(&transport).markets(request).await.expect("markets failed");

        assert_eq!(markets[0].id, "layer-1");
        assert_eq!(markets[0].market_cap_change_24h, Some(-0.66));
        assert_eq!(markets[0].top_3_coins_id.len(), 3);
    }
}
