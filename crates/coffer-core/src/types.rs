//! Core type definitions for Coffer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Contributor or owner identity (opaque account string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Native value in nano units (1 coin = 1_000_000_000 nano)
pub type NanoCoin = i64;

/// USD value at the same nano scale (1 USD = 1_000_000_000 nano-USD)
pub type NanoUsd = i64;

/// Constants
pub mod constants {
    use super::{NanoCoin, NanoUsd};

    /// 1 coin in nano units
    pub const NANO_PER_COIN: NanoCoin = 1_000_000_000;

    /// Decimal places of the nano scale
    pub const NATIVE_DECIMALS: u32 = 9;

    /// Default contribution floor: 50 USD at the nano scale
    pub const DEFAULT_MINIMUM_USD: NanoUsd = 50 * NANO_PER_COIN;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display_roundtrip() {
        let addr = Address::new("funder-1");
        assert_eq!(addr.to_string(), "funder-1");
        assert_eq!(addr.as_str(), "funder-1");
    }

    #[test]
    fn test_address_serde_transparent() {
        let addr = Address::new("owner");
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"owner\"");
        let parsed: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, addr);
    }

    #[test]
    fn test_default_floor_is_fifty_usd() {
        assert_eq!(constants::DEFAULT_MINIMUM_USD, 50_000_000_000);
    }
}
