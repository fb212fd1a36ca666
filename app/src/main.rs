//! cofferd: Coffer ledger daemon
//!
//! Loads configuration, wires the fixed price source and ledger, and serves
//! the HTTP API.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use coffer_api::AppState;
use coffer_core::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "cofferd", about = "Minimum-contribution crowdfunding ledger daemon")]
struct Cli {
    /// Path to a JSON config file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured API port
    #[arg(short, long)]
    port: Option<u16>,
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => AppConfig::default(),
    };

    if let Some(port) = cli.port {
        config.api_port = port;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    tracing::info!(
        "Ledger owner {}, floor {} nano-USD, feed answer {} at {} decimals",
        config.ledger.owner,
        config.ledger.minimum_usd,
        config.feed.answer,
        config.feed.decimals
    );

    let port = config.api_port;
    let state = AppState::from_config(config).context("invalid configuration")?;

    coffer_api::start_server(state, port)
        .await
        .context("API server failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_override() {
        let cli = Cli {
            config: None,
            port: Some(9000),
        };
        let config = load_config(&cli).unwrap();
        assert_eq!(config.api_port, 9000);
    }

    #[test]
    fn test_defaults_without_config_file() {
        let cli = Cli {
            config: None,
            port: None,
        };
        let config = load_config(&cli).unwrap();
        assert_eq!(config.api_port, 18080);
        assert_eq!(config.ledger.owner, "owner");
    }
}
