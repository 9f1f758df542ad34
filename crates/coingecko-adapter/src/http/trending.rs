/*
[INPUT]:  None
[OUTPUT]: Trending coins, NFTs and categories of the last 24 hours
[POS]:    HTTP layer - /search/trending endpoint
[UPDATE]: When the trending schema changes
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::Trending;

pub struct TrendingApi<'a> {
    transport: &'a Transport,
}

impl<'a> TrendingApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// GET /search/trending
    pub async fn trending(&self) -> Result<Trending> {
        self.transport.get("/search/trending", &[], QueryParams::new()).await
    }
}
