//! Application state shared across API handlers

use std::sync::Arc;

use coffer_core::{Address, AppConfig, Error};
use coffer_ledger::{Accounts, Ledger};
use price_feed::{FixedPriceSource, PriceSource};
use tokio::sync::RwLock;

/// Shared application state
///
/// The ledger and the account book sit behind `RwLock`s so every mutating
/// operation runs to completion exclusively; read handlers see the most
/// recently committed state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    feed: Arc<dyn PriceSource>,
    ledger: RwLock<Ledger>,
    accounts: RwLock<Accounts>,
}

impl AppState {
    /// Build state from configuration: fixed price source, open ledger,
    /// empty account book.
    pub fn from_config(config: AppConfig) -> Result<Self, Error> {
        if config.ledger.owner.is_empty() {
            return Err(Error::Config("ledger.owner must not be empty".into()));
        }
        if config.ledger.minimum_usd < 0 {
            return Err(Error::Config(
                "ledger.minimum_usd must be non-negative".into(),
            ));
        }

        let feed: Arc<dyn PriceSource> = Arc::new(FixedPriceSource::new(
            config.feed.answer,
            config.feed.decimals,
        ));
        let ledger = Ledger::new(
            Address::new(config.ledger.owner.clone()),
            feed.clone(),
            config.ledger.minimum_usd,
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                feed,
                ledger: RwLock::new(ledger),
                accounts: RwLock::new(Accounts::new()),
            }),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn feed(&self) -> &Arc<dyn PriceSource> {
        &self.inner.feed
    }

    pub fn ledger(&self) -> &RwLock<Ledger> {
        &self.inner.ledger
    }

    pub fn accounts(&self) -> &RwLock<Accounts> {
        &self.inner.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_wires_config_into_ledger() {
        let state = AppState::from_config(AppConfig::default()).unwrap();
        let ledger = state.ledger().read().await;
        assert_eq!(ledger.owner().as_str(), "owner");
        assert_eq!(ledger.minimum_usd(), 50_000_000_000);
        assert_eq!(ledger.balance(), 0);
    }

    #[tokio::test]
    async fn test_state_feed_matches_config() {
        let state = AppState::from_config(AppConfig::default()).unwrap();
        let reading = state.feed().latest_price().unwrap();
        assert_eq!(reading.answer, 200_000_000_000);
        assert_eq!(reading.decimals, 8);
    }

    #[test]
    fn test_empty_owner_rejected() {
        let mut config = AppConfig::default();
        config.ledger.owner = String::new();
        assert!(matches!(
            AppState::from_config(config),
            Err(Error::Config(_))
        ));
    }
}
