/*
[INPUT]:  Currency and day window for the market cap chart
[OUTPUT]: Global crypto market, DeFi aggregates and market cap history
[POS]:    HTTP layer - /global endpoints
[UPDATE]: When global endpoints change
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::{Global, GlobalDefi, GlobalMarketCapChart, GlobalMarketCapChartRequest, Validate};

pub struct GlobalApi<'a> {
    transport: &'a Transport,
}

impl<'a> GlobalApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// GET /global
    pub async fn global(&self) -> Result<Global> {
        self.transport.get("/global", &[], QueryParams::new()).await
    }

    /// GET /global/decentralized_finance_defi
    pub async fn defi(&self) -> Result<GlobalDefi> {
        self.transport
            .get("/global/decentralized_finance_defi", &[], QueryParams::new())
            .await
    }

    /// GET /global/market_cap_chart?vs_currency={vs_currency}&days={days}
    pub async fn market_cap_chart(
        &self,
        mut request: GlobalMarketCapChartRequest,
    ) -> Result<GlobalMarketCapChart> {
        request.validate()?;
        let query = QueryParams::new()
            .required("vs_currency", &request.vs_currency)
            .required("days", &request.days);
        self.transport.get("/global/market_cap_chart", &[], query).await
    }
}
