/*
[INPUT]:  None
[OUTPUT]: BTC-denominated exchange rates for fiat, crypto and commodities
[POS]:    HTTP layer - /exchange_rates endpoint
[UPDATE]: When the exchange rate schema changes
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::ExchangeRates;

pub struct ExchangeRatesApi<'a> {
    transport: &'a Transport,
}

impl<'a> ExchangeRatesApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// GET /exchange_rates
    pub async fn rates(&self) -> Result<ExchangeRates> {
        self.transport.get("/exchange_rates", &[], QueryParams::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::mock_transport;
    use crate::types::ExchangeRate;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_rates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exchange_rates"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"rates":{"btc":{"name":"Bitcoin","unit":"BTC","value":1,"type":"crypto"},"eth":{"name":"Ether","unit":"ETH","value":20.656,"type":"crypto"}}}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let rates = ExchangeRatesApi::new(&transport).rates().await.expect("rates failed");

        assert_eq!(
            rates.rates.get("btc"),
            Some(&ExchangeRate {
                name: "Bitcoin".to_string(),
                unit: "BTC".to_string(),
                value: 1.0,
                kind: "crypto".to_string(),
            })
        );
        assert_eq!(rates.rates.len(), 2);
    }
}
