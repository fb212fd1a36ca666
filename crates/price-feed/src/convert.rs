//! Native-to-USD conversion
//!
//! Pure integer math, no I/O.
//!
//! # Units
//!
//! - Native amounts: nano units (i64), 1 coin = 1_000_000_000 nano
//! - USD values: nano-USD (i64), same 9-decimal scale
//! - Intermediate results use i128 to avoid overflow

use coffer_core::types::constants::{NANO_PER_COIN, NATIVE_DECIMALS};
use coffer_core::{FeedError, NanoCoin, NanoUsd};

use crate::source::PriceReading;

/// Convert a native amount to its USD equivalent at the given reading.
///
/// The answer is normalized to the nano scale before multiplying, and the
/// division truncates toward zero. Results beyond i64 saturate at i64::MAX.
pub fn to_usd(amount: NanoCoin, reading: &PriceReading) -> Result<NanoUsd, FeedError> {
    if reading.answer <= 0 {
        return Err(FeedError::NonPositivePrice {
            answer: reading.answer,
        });
    }

    let price_nano = normalize_answer(reading.answer, reading.decimals);
    let usd = price_nano
        .checked_mul(amount as i128)
        .map(|v| v / NANO_PER_COIN as i128)
        .unwrap_or(i128::MAX);

    Ok(usd.min(i64::MAX as i128) as NanoUsd)
}

/// Scale a raw answer to the nano (9-decimal) scale
fn normalize_answer(answer: i64, decimals: u8) -> i128 {
    let decimals = decimals as u32;
    if decimals <= NATIVE_DECIMALS {
        (answer as i128) * 10i128.pow(NATIVE_DECIMALS - decimals)
    } else if decimals - NATIVE_DECIMALS > 38 {
        // 10^39 exceeds i128; the quotient is zero for any i64 answer
        0
    } else {
        (answer as i128) / 10i128.pow(decimals - NATIVE_DECIMALS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(answer: i64, decimals: u8) -> PriceReading {
        PriceReading { answer, decimals }
    }

    #[test]
    fn test_reference_rate_above_floor() {
        // 2000 USD per coin at 8 decimals; 0.03 coin => 60 USD
        let r = reading(200_000_000_000, 8);
        let usd = to_usd(30_000_000, &r).unwrap();
        assert_eq!(usd, 60 * NANO_PER_COIN);
    }

    #[test]
    fn test_reference_rate_below_floor() {
        // 0.001 coin => 2 USD
        let r = reading(200_000_000_000, 8);
        let usd = to_usd(1_000_000, &r).unwrap();
        assert_eq!(usd, 2 * NANO_PER_COIN);
    }

    #[test]
    fn test_whole_coin() {
        let r = reading(200_000_000_000, 8);
        let usd = to_usd(NANO_PER_COIN, &r).unwrap();
        assert_eq!(usd, 2000 * NANO_PER_COIN);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 3 USD per coin at 0 decimals, 1 nano => exactly 3 nano-USD
        let r = reading(3, 0);
        assert_eq!(to_usd(1, &r).unwrap(), 3);
        // 1.5 USD per coin (15 at 1 decimal), 1 nano => 1.5 nano-USD, truncated
        let r = reading(15, 1);
        assert_eq!(to_usd(1, &r).unwrap(), 1);
        // 2 coins at 1.5 USD => 3 USD exactly
        assert_eq!(to_usd(2 * NANO_PER_COIN, &r).unwrap(), 3 * NANO_PER_COIN);
    }

    #[test]
    fn test_answer_with_more_than_native_decimals() {
        // 2000 USD per coin at 12 decimals
        let r = reading(2_000_000_000_000_000, 12);
        let usd = to_usd(30_000_000, &r).unwrap();
        assert_eq!(usd, 60 * NANO_PER_COIN);
    }

    #[test]
    fn test_zero_amount() {
        let r = reading(200_000_000_000, 8);
        assert_eq!(to_usd(0, &r).unwrap(), 0);
    }

    #[test]
    fn test_non_positive_answer_rejected() {
        let r = reading(0, 8);
        assert!(matches!(
            to_usd(NANO_PER_COIN, &r),
            Err(FeedError::NonPositivePrice { answer: 0 })
        ));

        let r = reading(-5, 8);
        assert!(to_usd(NANO_PER_COIN, &r).is_err());
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let r = reading(i64::MAX, 0);
        let usd = to_usd(i64::MAX, &r).unwrap();
        assert_eq!(usd, i64::MAX);
    }
}
