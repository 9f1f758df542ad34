/*
[INPUT]:  Treasury coin (bitcoin or ethereum)
[OUTPUT]: Public companies' holdings of that coin
[POS]:    HTTP layer - /companies endpoint
[UPDATE]: When the treasury schema changes
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::{PublicTreasury, PublicTreasuryRequest, Validate};

pub struct CompaniesApi<'a> {
    transport: &'a Transport,
}

impl<'a> CompaniesApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// GET /companies/public_treasury/{coin_id}
    pub async fn public_treasury(&self, mut request: PublicTreasuryRequest) -> Result<PublicTreasury> {
        request.validate()?;
        let coin_id = request.coin_id.as_str();
        self.transport
            .get(
                "/companies/public_treasury/{coin_id}",
                &[("coin_id", coin_id)],
                QueryParams::new(),
            )
            .await
    }
}
