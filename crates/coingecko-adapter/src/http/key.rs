/*
[INPUT]:  Configured API key
[OUTPUT]: Plan, rate limit and monthly credit usage
[POS]:    HTTP layer - API key usage endpoint
[UPDATE]: When the key usage schema changes
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::ApiKeyUsage;

pub struct KeyApi<'a> {
    transport: &'a Transport,
}

impl<'a> KeyApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Usage of the configured API key
    ///
    /// GET /key
    pub async fn key(&self) -> Result<ApiKeyUsage> {
        self.transport.get("/key", &[], QueryParams::new()).await
    }
}
