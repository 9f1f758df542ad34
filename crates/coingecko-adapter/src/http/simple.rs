/*
[INPUT]:  Coin ids or token contract addresses, target currencies
[OUTPUT]: Spot prices keyed by coin/contract then currency
[POS]:    HTTP layer - simple price endpoints
[UPDATE]: When adding simple endpoints or price options
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::{SimplePriceRequest, SimplePrices, TokenPriceRequest, Validate};

pub struct SimpleApi<'a> {
    transport: &'a Transport,
}

impl<'a> SimpleApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Prices of one or more coins in one or more currencies
    ///
    /// GET /simple/price?ids={ids}&vs_currencies={vs_currencies}
    pub async fn price(&self, mut request: SimplePriceRequest) -> Result<SimplePrices> {
        request.validate()?;
        let query = QueryParams::new()
            .list("ids", &request.ids)
            .list("vs_currencies", &request.vs_currencies)
            .flag("include_market_cap", request.include_market_cap)
            .flag("include_24hr_vol", request.include_24hr_vol)
            .flag("include_24hr_change", request.include_24hr_change)
            .flag("include_last_updated_at", request.include_last_updated_at)
            .optional("precision", request.precision.as_deref());
        self.transport.get("/simple/price", &[], query).await
    }

    /// Prices of tokens on one asset platform, keyed by contract address
    ///
    /// GET /simple/token_price/{id}
    pub async fn token_price(&self, mut request: TokenPriceRequest) -> Result<SimplePrices> {
        request.validate()?;
        let query = QueryParams::new()
            .list("contract_addresses", &request.contract_addresses)
            .list("vs_currencies", &request.vs_currencies)
            .flag("include_market_cap", request.include_market_cap)
            .flag("include_24hr_vol", request.include_24hr_vol)
            .flag("include_24hr_change", request.include_24hr_change)
            .flag("include_last_updated_at", request.include_last_updated_at)
            .optional("precision", request.precision.as_deref());
        self.transport
            .get("/simple/token_price/{id}", &[("id", request.id.as_str())], query)
            .await
    }

    /// Currency codes accepted as `vs_currency`
    ///
    /// GET /simple/supported_vs_currencies
    pub async fn supported_vs_currencies(&self) -> Result<Vec<String>> {
        self.transport
            .get("/simple/supported_vs_currencies", &[], QueryParams::new())
            .await
    }
}
