//! price-feed: External price source boundary for Coffer
//!
//! Wraps a read-only price source behind the [`PriceSource`] trait and
//! converts native amounts to their USD equivalent. Concrete sources are
//! injected at ledger construction, so the ledger never branches on
//! environment.

pub mod convert;
pub mod source;

pub use convert::to_usd;
pub use source::{FixedPriceSource, PriceReading, PriceSource};
