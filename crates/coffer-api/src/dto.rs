//! Data Transfer Objects for API requests and responses

use serde::{Deserialize, Serialize};

use coffer_core::{NanoCoin, NanoUsd};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Ledger state summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerStateResponse {
    pub owner: String,
    pub balance_nano: NanoCoin,
    pub funder_count: usize,
    pub minimum_usd_nano: NanoUsd,
}

/// One funder record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunderEntry {
    pub address: String,
    pub amount_nano: NanoCoin,
}

/// Ordered funder list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundersResponse {
    pub funders: Vec<FunderEntry>,
}

/// Contribution request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundRequest {
    pub caller: String,
    pub amount_nano: NanoCoin,
}

/// Accepted contribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundResponse {
    pub converted_usd_nano: NanoUsd,
    pub total_funded_nano: NanoCoin,
    pub balance_nano: NanoCoin,
}

/// Withdrawal request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub caller: String,
    /// Use the single-read withdrawal variant
    #[serde(default)]
    pub cheaper: bool,
}

/// Completed withdrawal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawResponse {
    pub paid_nano: NanoCoin,
    pub owner_balance_nano: NanoCoin,
}

/// Oracle price response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OraclePriceResponse {
    /// Raw answer as reported by the source
    pub answer: i64,
    /// Decimal places of the answer
    pub decimals: u8,
    /// USD value of 1 coin at the nano scale
    pub usd_per_coin_nano: NanoUsd,
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }
}
