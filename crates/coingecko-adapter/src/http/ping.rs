/*
[INPUT]:  None
[OUTPUT]: Server liveness message
[POS]:    HTTP layer - service status endpoint
[UPDATE]: When the status endpoint changes
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::Ping;

pub struct PingApi<'a> {
    transport: &'a Transport,
}

impl<'a> PingApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Check API server status
    ///
    /// GET /ping
    pub async fn ping(&self) -> Result<Ping> {
        self.transport.get("/ping", &[], QueryParams::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::mock_transport;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_ping() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"gecko_says":"(V3) To the Moon!"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let response = PingApi::new(&transport).ping().await.expect("ping failed");

        assert_eq!(
            response,
            Ping {
                gecko_says: "(V3) To the Moon!".to_string(),
            }
        );
    }
}
