/*
[INPUT]:  Asset platform ids
[OUTPUT]: Blockchain networks and the tokens listed on them
[POS]:    HTTP layer - /asset_platforms endpoints
[UPDATE]: When asset platform endpoints change
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::{AssetPlatform, PlatformToken, TokenListRequest, Validate};

pub struct AssetPlatformsApi<'a> {
    transport: &'a Transport,
}

impl<'a> AssetPlatformsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// GET /asset_platforms
    pub async fn list(&self) -> Result<Vec<AssetPlatform>> {
        self.transport.get("/asset_platforms", &[], QueryParams::new()).await
    }

    /// Tokens registered on one platform
    ///
    /// GET /asset_platforms/{asset_platform_id}/contract
    pub async fn token_list(&self, mut request: TokenListRequest) -> Result<Vec<PlatformToken>> {
        request.validate()?;
        self.transport
            .get(
                "/asset_platforms/{asset_platform_id}/contract",
                &[("asset_platform_id", request.asset_platform_id.as_str())],
                QueryParams::new(),
            )
            .await
    }
}
