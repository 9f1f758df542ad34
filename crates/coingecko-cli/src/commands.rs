/*
[INPUT]:  Parsed subcommand and a configured CoinGecko client
[OUTPUT]: Pretty-printed JSON of the endpoint response
[POS]:    Command layer - maps subcommands onto client calls
[UPDATE]: When adding or changing subcommands
*/

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Subcommand;
use coingecko_adapter::{
    CoinDataRequest, CoinGeckoClient, CoinHistoryRequest, CoinsMarketsRequest,
    MarketChartRequest, SearchRequest, SimplePriceRequest,
};
use serde::Serialize;
use tracing::debug;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check API server status
    Ping,
    /// Show usage of the configured API key
    Key,
    /// Spot price of coins in target currencies
    Price {
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,
        #[arg(long = "vs", value_delimiter = ',', default_value = "usd")]
        vs_currencies: Vec<String>,
    },
    /// Market rows ordered by market cap
    Markets {
        #[arg(long = "vs", default_value = "usd")]
        vs_currency: String,
        #[arg(long)]
        per_page: Option<u32>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Full detail of one coin
    Coin { id: String },
    /// Snapshot of one coin on a date (YYYY-MM-DD)
    History {
        id: String,
        #[arg(long)]
        date: NaiveDate,
    },
    /// Price, market cap and volume history
    Chart {
        id: String,
        #[arg(long = "vs", default_value = "usd")]
        vs_currency: String,
        #[arg(long, default_value = "7")]
        days: String,
    },
    /// Search coins, exchanges, categories and NFTs
    Search { query: String },
    /// Trending coins, NFTs and categories
    Trending,
    /// Global market data
    Global,
    /// BTC exchange rates
    ExchangeRates,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping => "ping",
            Command::Key => "key",
            Command::Price { .. } => "price",
            Command::Markets { .. } => "markets",
            Command::Coin { .. } => "coin",
            Command::History { .. } => "history",
            Command::Chart { .. } => "chart",
            Command::Search { .. } => "search",
            Command::Trending => "trending",
            Command::Global => "global",
            Command::ExchangeRates => "exchange-rates",
        }
    }
}

/// Run one command and render its response as pretty JSON
pub async fn execute(client: &CoinGeckoClient, command: &Command) -> Result<String> {
    debug!(command = command.name(), "executing command");

    let output = match command {
        Command::Ping => render(client.ping().await),
        Command::Key => render(client.key().key().await),
        Command::Price { ids, vs_currencies } => render(
            client
                .simple()
                .price(SimplePriceRequest::new(ids.clone(), vs_currencies.clone()))
                .await,
        ),
        Command::Markets {
            vs_currency,
            per_page,
            page,
        } => {
            let request = CoinsMarketsRequest {
                per_page: *per_page,
                page: *page,
                ..CoinsMarketsRequest::new(vs_currency.as_str())
            };
            render(client.coins().markets(request).await)
        }
        Command::Coin { id } => {
            let request = CoinDataRequest {
                localization: Some(false),
                tickers: Some(false),
                ..CoinDataRequest::new(id.as_str())
            };
            render(client.coins().coin(request).await)
        }
        Command::History { id, date } => {
            let request = CoinHistoryRequest {
                localization: Some(false),
                ..CoinHistoryRequest::new(id.as_str(), *date)
            };
            render(client.coins().history(request).await)
        }
        Command::Chart {
            id,
            vs_currency,
            days,
        } => render(
            client
                .coins()
                .market_chart(MarketChartRequest::new(
                    id.as_str(),
                    vs_currency.as_str(),
                    days.as_str(),
                ))
                .await,
        ),
        Command::Search { query } => render(
            client
                .search()
                .search(SearchRequest::new(query.as_str()))
                .await,
        ),
        Command::Trending => render(client.trending().trending().await),
        Command::Global => render(client.global().global().await),
        Command::ExchangeRates => render(client.exchange_rates().rates().await),
    };
    output.with_context(|| format!("{} failed", command.name()))
}

fn render<T: Serialize>(response: coingecko_adapter::Result<T>) -> Result<String> {
    let value = response?;
    serde_json::to_string_pretty(&value).context("serialize response")
}
