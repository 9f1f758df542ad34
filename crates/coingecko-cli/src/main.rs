/*
[INPUT]:  CLI arguments, YAML configuration file, COINGECKO_API_KEY
[OUTPUT]: Pretty JSON of one CoinGecko endpoint on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use coingecko_adapter::CoinGeckoClient;
use coingecko_cli::{CliConfig, Command, execute};

#[derive(Parser, Debug)]
#[command(name = "coingecko", version, about = "CoinGecko v3 API command-line client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[arg(long = "api-key", env = "COINGECKO_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = load_config(args.config_path.as_deref())?;
    let _guard = init_tracing(&args.log_level, config.log_dir.as_deref())?;

    info!(
        command = args.command.name(),
        base_url = %config.base_url,
        "starting coingecko"
    );

    let client = CoinGeckoClient::with_config(config.client_config(args.api_key.as_deref()))
        .context("build coingecko client")?;

    let output = execute(&client, &args.command).await?;
    println!("{output}");
    Ok(())
}

fn init_tracing(log_level: &str, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "coingecko.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            Ok(Some(guard))
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            Ok(None)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    match path {
        Some(path) => CliConfig::from_file(path).context("load config"),
        None => Ok(CliConfig::default()),
    }
}
