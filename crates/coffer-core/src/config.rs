//! Configuration types for Coffer

use serde::{Deserialize, Serialize};

use crate::types::{constants, NanoUsd};

/// Fixed price source configuration
///
/// Mirrors the read contract of an aggregator-style feed: a raw answer and
/// the number of decimals it carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Raw price answer (e.g. 2000 USD per coin at 8 decimals = 200_000_000_000)
    pub answer: i64,

    /// Decimal places of the answer
    #[serde(default = "default_feed_decimals")]
    pub decimals: u8,
}

fn default_feed_decimals() -> u8 {
    8
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            // 2000 USD per coin at 8 decimals
            answer: 200_000_000_000,
            decimals: default_feed_decimals(),
        }
    }
}

/// Contribution ledger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Owner identity, authorized to withdraw
    pub owner: String,

    /// Contribution floor in nano-USD
    #[serde(default = "default_minimum_usd")]
    pub minimum_usd: NanoUsd,
}

fn default_minimum_usd() -> NanoUsd {
    constants::DEFAULT_MINIMUM_USD
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            owner: "owner".to_string(),
            minimum_usd: default_minimum_usd(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ledger settings
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Price source settings
    #[serde(default)]
    pub feed: FeedConfig,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

fn default_api_port() -> u16 {
    18080
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            feed: FeedConfig::default(),
            api_port: default_api_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ledger.owner, "owner");
        assert_eq!(config.ledger.minimum_usd, 50_000_000_000);
        assert_eq!(config.feed.answer, 200_000_000_000);
        assert_eq!(config.feed.decimals, 8);
        assert_eq!(config.api_port, 18080);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ledger.owner, config.ledger.owner);
        assert_eq!(parsed.feed.answer, config.feed.answer);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{"ledger": {"owner": "alice"}}"#).unwrap();
        assert_eq!(parsed.ledger.owner, "alice");
        assert_eq!(parsed.ledger.minimum_usd, 50_000_000_000);
        assert_eq!(parsed.feed.decimals, 8);
    }
}
