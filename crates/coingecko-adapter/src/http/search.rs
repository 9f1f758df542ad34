/*
[INPUT]:  Free-text search query
[OUTPUT]: Matching coins, exchanges, categories and NFTs
[POS]:    HTTP layer - /search endpoint
[UPDATE]: When the search schema changes
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::{SearchRequest, SearchResults, Validate};

pub struct SearchApi<'a> {
    transport: &'a Transport,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// GET /search?query={query}
    pub async fn search(&self, mut request: SearchRequest) -> Result<SearchResults> {
        request.validate()?;
        let query = QueryParams::new().required("query", &request.query);
        self.transport.get("/search", &[], query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::mock_transport;
    use crate::types::Identifier;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search() {
        let server = MockServer::start().await;
        let body = r#"{
            "coins": [{"id": "ethereum", "name": "Ethereum", "api_symbol": "ethereum", "symbol": "ETH", "market_cap_rank": 2}],
            "exchanges": [{"id": "uniswap_v3", "name": "Uniswap V3 (Ethereum)", "market_type": "spot"}],
            "icos": [],
            "categories": [{"id": 54, "name": "Ethereum Ecosystem"}],
            "nfts": [{"id": "cryptokitties", "name": "CryptoKitties", "symbol": "CK"}]
        }"#;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("query", "ethereum"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let results = SearchApi::new(&transport)
            .search(SearchRequest::new("ethereum"))
            .await
            .expect("search failed");

        assert_eq!(results.coins[0].market_cap_rank, Some(2));
        assert_eq!(results.exchanges[0].market_type.as_deref(), Some("spot"));
        assert_eq!(results.categories[0].id, Identifier::Numeric(54));
        assert_eq!(results.nfts[0].symbol.as_deref(), Some("CK"));
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let err = SearchApi::new(&transport)
            .search(SearchRequest::new("  "))
            .await
            .unwrap_err();
        assert!(err.is_validation_error());
    }
}
