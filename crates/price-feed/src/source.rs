//! Price source trait and the fixed-answer implementation

use std::sync::atomic::{AtomicI64, Ordering};

use coffer_core::FeedError;
use serde::{Deserialize, Serialize};

/// A single price observation from an external source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceReading {
    /// Raw answer as reported by the source
    pub answer: i64,
    /// Decimal places the answer carries
    pub decimals: u8,
}

/// Read contract exposed by any external price source.
///
/// Any source implementing this is interchangeable: a live feed client or a
/// fixed-answer double. Staleness is the source's own contract and is not
/// validated here.
pub trait PriceSource: Send + Sync {
    /// Latest reported price and its declared decimal precision
    fn latest_price(&self) -> Result<PriceReading, FeedError>;
}

/// Fixed-answer price source.
///
/// Used for local deployments and tests. The answer can be updated in place
/// to simulate a moving market.
#[derive(Debug)]
pub struct FixedPriceSource {
    answer: AtomicI64,
    decimals: u8,
}

impl FixedPriceSource {
    pub fn new(answer: i64, decimals: u8) -> Self {
        Self {
            answer: AtomicI64::new(answer),
            decimals,
        }
    }

    /// Replace the reported answer
    pub fn set_answer(&self, answer: i64) {
        tracing::debug!("Price answer updated to {}", answer);
        self.answer.store(answer, Ordering::Relaxed);
    }
}

impl PriceSource for FixedPriceSource {
    fn latest_price(&self) -> Result<PriceReading, FeedError> {
        Ok(PriceReading {
            answer: self.answer.load(Ordering::Relaxed),
            decimals: self.decimals,
        })
    }
}
