//! coffer-ledger: Minimum-contribution crowdfunding ledger
//!
//! The stateful core of Coffer: accepts contributions gated by a USD floor,
//! tracks each funder's cumulative total, and lets the single owner withdraw
//! and reset the ledger.
//!
//! # Key Types
//!
//! - [`Ledger`]: the contribution state machine
//! - [`PayoutSink`]: external value-movement boundary used by withdrawals
//! - [`Accounts`]: in-memory balance book implementing [`PayoutSink`]

pub mod ledger;
pub mod payout;

pub use ledger::Ledger;
pub use payout::{Accounts, PayoutSink};
