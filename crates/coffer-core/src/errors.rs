//! Error types for Coffer

use thiserror::Error;

use crate::types::{NanoCoin, NanoUsd};

/// Core errors that can occur in Coffer
#[derive(Debug, Error)]
pub enum Error {
    #[error("Price feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Price source read errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Price source unavailable: {message}")]
    Unavailable { message: String },

    #[error("Price source reported non-positive answer: {answer}")]
    NonPositivePrice { answer: i64 },
}

/// Contribution ledger errors
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Contribution of {converted} nano-USD is below the {required} nano-USD floor")]
    InsufficientContribution {
        converted: NanoUsd,
        required: NanoUsd,
    },

    #[error("Caller {caller} is not the ledger owner")]
    NotOwner { caller: String },

    #[error("Contribution of {amount} nano would overflow the ledger balance")]
    ContributionOverflow { amount: NanoCoin },

    #[error("Payout of {amount} nano failed: {message}")]
    TransferFailed { amount: NanoCoin, message: String },

    #[error("Funder index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for Coffer operations
pub type Result<T> = std::result::Result<T, Error>;

impl LedgerError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientContribution { .. } => "insufficient_contribution",
            Self::ContributionOverflow { .. } => "contribution_overflow",
            Self::NotOwner { .. } => "not_owner",
            Self::TransferFailed { .. } => "transfer_failed",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InsufficientContribution { .. } => 422,
            Self::ContributionOverflow { .. } => 422,
            Self::NotOwner { .. } => 403,
            Self::TransferFailed { .. } => 502,
            Self::IndexOutOfRange { .. } => 404,
        }
    }
}

impl FeedError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "feed_unavailable",
            Self::NonPositivePrice { .. } => "feed_bad_answer",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Unavailable { .. } => 503,
            Self::NonPositivePrice { .. } => 502,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_error_codes() {
        let err = LedgerError::NotOwner {
            caller: "mallory".into(),
        };
        assert_eq!(err.error_code(), "not_owner");
        assert_eq!(err.status_code(), 403);

        let err = LedgerError::InsufficientContribution {
            converted: 2_000_000_000,
            required: 50_000_000_000,
        };
        assert_eq!(err.error_code(), "insufficient_contribution");
        assert_eq!(err.status_code(), 422);

        let err = LedgerError::ContributionOverflow { amount: i64::MAX };
        assert_eq!(err.error_code(), "contribution_overflow");
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn test_feed_error_codes() {
        let err = FeedError::Unavailable {
            message: "timeout".into(),
        };
        assert_eq!(err.error_code(), "feed_unavailable");
        assert_eq!(err.status_code(), 503);
    }

    #[test]
    fn test_error_rollup() {
        let err: Error = LedgerError::IndexOutOfRange { index: 3, len: 0 }.into();
        assert!(matches!(err, Error::Ledger(_)));
    }
}
