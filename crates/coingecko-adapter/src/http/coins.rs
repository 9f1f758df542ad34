/*
[INPUT]:  Coin ids and coin request descriptors
[OUTPUT]: Coin lists, market rows, coin detail, tickers, history and charts
[POS]:    HTTP layer - /coins endpoints
[UPDATE]: When adding coin endpoints or changing coin query options
*/

use crate::http::{QueryParams, Result, Transport};
use crate::types::{
    CirculatingSupplyChart, CoinData, CoinDataRequest, CoinHistory, CoinHistoryRequest,
    CoinListEntry, CoinMarket, CoinTickersRequest, CoinsListRequest, CoinsMarketsRequest,
    MarketChart, MarketChartRangeRequest, MarketChartRequest, NewCoin, OhlcCandle,
    OhlcRangeRequest, OhlcRequest, SupplyChartRangeRequest, SupplyChartRequest, TickersPage,
    TopGainersLosers, TopGainersLosersRequest, TotalSupplyChart, Validate,
};

pub struct CoinsApi<'a> {
    transport: &'a Transport,
}

impl<'a> CoinsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// All supported coins with id, name and symbol
    ///
    /// GET /coins/list
    pub async fn list(&self, mut request: CoinsListRequest) -> Result<Vec<CoinListEntry>> {
        request.validate()?;
        let query = QueryParams::new()
            .flag("include_platform", request.include_platform)
            .optional("status", request.status);
        self.transport.get("/coins/list", &[], query).await
    }

    /// Top 30 gainers and losers over a window
    ///
    /// GET /coins/top_gainers_losers?vs_currency={vs_currency}
    pub async fn top_gainers_losers(
        &self,
        mut request: TopGainersLosersRequest,
    ) -> Result<TopGainersLosers> {
        request.validate()?;
        let query = QueryParams::new()
            .required("vs_currency", &request.vs_currency)
            .optional("duration", request.duration)
            .optional("top_coins", request.top_coins);
        self.transport.get("/coins/top_gainers_losers", &[], query).await
    }

    /// Latest 200 coins listed
    ///
    /// GET /coins/list/new
    pub async fn recently_added(&self) -> Result<Vec<NewCoin>> {
        self.transport.get("/coins/list/new", &[], QueryParams::new()).await
    }

    /// Market rows: price, market cap, volume and changes
    ///
    /// GET /coins/markets?vs_currency={vs_currency}
    pub async fn markets(&self, mut request: CoinsMarketsRequest) -> Result<Vec<CoinMarket>> {
        request.validate()?;
        let query = QueryParams::new()
            .required("vs_currency", &request.vs_currency)
            .list("ids", &request.ids)
            .optional("category", request.category.as_deref())
            .optional("order", request.order)
            .optional("per_page", request.per_page)
            .optional("page", request.page)
            .flag("sparkline", request.sparkline)
            .list("price_change_percentage", &request.price_change_percentage)
            .optional("locale", request.locale);
        self.transport.get("/coins/markets", &[], query).await
    }

    /// Full coin detail
    ///
    /// GET /coins/{id}
    pub async fn coin(&self, mut request: CoinDataRequest) -> Result<CoinData> {
        request.validate()?;
        let query = QueryParams::new()
            .flag("localization", request.localization)
            .flag("tickers", request.tickers)
            .flag("market_data", request.market_data)
            .flag("community_data", request.community_data)
            .flag("developer_data", request.developer_data)
            .flag("sparkline", request.sparkline)
            .optional("locale", request.locale);
        self.transport
            .get("/coins/{id}", &[("id", request.id.as_str())], query)
            .await
    }

    /// Paginated tickers of one coin
    ///
    /// GET /coins/{id}/tickers
    pub async fn tickers(&self, mut request: CoinTickersRequest) -> Result<TickersPage> {
        request.validate()?;
        let query = QueryParams::new()
            .list("exchange_ids", &request.exchange_ids)
            .list("include", &request.include)
            .optional("page", request.page)
            .optional("order", request.order)
            .flag("depth", request.depth);
        self.transport
            .get("/coins/{id}/tickers", &[("id", request.id.as_str())], query)
            .await
    }

    /// Snapshot of a coin at 00:00 UTC on a date
    ///
    /// GET /coins/{id}/history?date={dd-mm-yyyy}
    pub async fn history(&self, mut request: CoinHistoryRequest) -> Result<CoinHistory> {
        request.validate()?;
        let query = QueryParams::new()
            .required("date", request.wire_date())
            .flag("localization", request.localization);
        self.transport
            .get("/coins/{id}/history", &[("id", request.id.as_str())], query)
            .await
    }

    /// Price, market cap and volume series over a number of days
    ///
    /// GET /coins/{id}/market_chart?vs_currency={vs_currency}&days={days}
    pub async fn market_chart(&self, mut request: MarketChartRequest) -> Result<MarketChart> {
        request.validate()?;
        let query = QueryParams::new()
            .required("vs_currency", &request.vs_currency)
            .required("days", &request.days)
            .optional("interval", request.interval.as_deref())
            .optional("precision", request.precision.as_deref());
        self.transport
            .get("/coins/{id}/market_chart", &[("id", request.id.as_str())], query)
            .await
    }

    /// Price, market cap and volume series between two UNIX timestamps
    ///
    /// GET /coins/{id}/market_chart/range?vs_currency={vs_currency}&from={from}&to={to}
    pub async fn market_chart_range(
        &self,
        mut request: MarketChartRangeRequest,
    ) -> Result<MarketChart> {
        request.validate()?;
        let query = QueryParams::new()
            .required("vs_currency", &request.vs_currency)
            .required("from", request.from)
            .required("to", request.to)
            .optional("interval", request.interval.as_deref())
            .optional("precision", request.precision.as_deref());
        self.transport
            .get("/coins/{id}/market_chart/range", &[("id", request.id.as_str())], query)
            .await
    }

    /// OHLC candles over a number of days
    ///
    /// GET /coins/{id}/ohlc?vs_currency={vs_currency}&days={days}
    pub async fn ohlc(&self, mut request: OhlcRequest) -> Result<Vec<OhlcCandle>> {
        request.validate()?;
        let query = QueryParams::new()
            .required("vs_currency", &request.vs_currency)
            .required("days", &request.days)
            .optional("interval", request.interval.as_deref());
        self.transport
            .get("/coins/{id}/ohlc", &[("id", request.id.as_str())], query)
            .await
    }

    /// OHLC candles between two UNIX timestamps
    ///
    /// GET /coins/{id}/ohlc/range?vs_currency={vs_currency}&from={from}&to={to}
    pub async fn ohlc_range(&self, mut request: OhlcRangeRequest) -> Result<Vec<OhlcCandle>> {
        request.validate()?;
        let query = QueryParams::new()
            .required("vs_currency", &request.vs_currency)
            .required("from", request.from)
            .required("to", request.to)
            .optional("interval", request.interval.as_deref());
        self.transport
            .get("/coins/{id}/ohlc/range", &[("id", request.id.as_str())], query)
            .await
    }

    /// GET /coins/{id}/circulating_supply_chart?days={days}
    pub async fn circulating_supply_chart(
        &self,
        mut request: SupplyChartRequest,
    ) -> Result<CirculatingSupplyChart> {
        request.validate()?;
        let query = QueryParams::new()
            .required("days", &request.days)
            .optional("interval", request.interval.as_deref());
        self.transport
            .get(
                "/coins/{id}/circulating_supply_chart",
                &[("id", request.id.as_str())],
                query,
            )
            .await
    }

    /// GET /coins/{id}/circulating_supply_chart/range?from={from}&to={to}
    pub async fn circulating_supply_chart_range(
        &self,
        mut request: SupplyChartRangeRequest,
    ) -> Result<CirculatingSupplyChart> {
        request.validate()?;
        let query = QueryParams::new()
            .required("from", request.from)
            .required("to", request.to);
        self.transport
            .get(
                "/coins/{id}/circulating_supply_chart/range",
                &[("id", request.id.as_str())],
                query,
            )
            .await
    }

    /// GET /coins/{id}/total_supply_chart?days={days}
    pub async fn total_supply_chart(
        &self,
        mut request: SupplyChartRequest,
    ) -> Result<TotalSupplyChart> {
        request.validate()?;
        let query = QueryParams::new()
            .required("days", &request.days)
            .optional("interval", request.interval.as_deref());
        self.transport
            .get("/coins/{id}/total_supply_chart", &[("id", request.id.as_str())], query)
            .await
    }

    /// GET /coins/{id}/total_supply_chart/range?from={from}&to={to}
    pub async fn total_supply_chart_range(
        &self,
        mut request: SupplyChartRangeRequest,
    ) -> Result<TotalSupplyChart> {
        request.validate()?;
        let query = QueryParams::new()
            .required("from", request.from)
            .required("to", request.to);
        self.transport
            .get(
                "/coins/{id}/total_supply_chart/range",
                &[("id", request.id.as_str())],
                query,
            )
            .await
    }
}
