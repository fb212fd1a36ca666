//! Payout boundary for withdrawals

use std::collections::HashMap;

use coffer_core::{Address, LedgerError, NanoCoin};

/// External value-movement mechanism used when the ledger pays out.
///
/// The ledger commits its state reset before calling this, so a sink that
/// calls back into the ledger observes post-clear state. A failed delivery
/// makes the whole withdrawal fail and roll back.
pub trait PayoutSink {
    fn deliver(&mut self, to: &Address, amount: NanoCoin) -> Result<(), LedgerError>;
}

/// In-memory balance book.
///
/// Holds per-identity balances for deployments without an external settlement
/// layer; delivery credits the recipient unconditionally.
#[derive(Debug, Clone, Default)]
pub struct Accounts {
    balances: HashMap<Address, NanoCoin>,
}

impl Accounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance for an identity (zero if absent)
    pub fn balance(&self, who: &Address) -> NanoCoin {
        self.balances.get(who).copied().unwrap_or(0)
    }

    /// Credit an identity directly (funding accounts in tests and demos)
    pub fn credit(&mut self, who: &Address, amount: NanoCoin) {
        *self.balances.entry(who.clone()).or_insert(0) += amount;
    }
}

impl PayoutSink for Accounts {
    fn deliver(&mut self, to: &Address, amount: NanoCoin) -> Result<(), LedgerError> {
        self.credit(to, amount);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_identity_has_zero_balance() {
        let book = Accounts::new();
        assert_eq!(book.balance(&Address::new("nobody")), 0);
    }

    #[test]
    fn test_deliver_accumulates() {
        let mut book = Accounts::new();
        let owner = Address::new("owner");
        book.deliver(&owner, 3_000_000_000).unwrap();
        book.deliver(&owner, 2_000_000_000).unwrap();
        assert_eq!(book.balance(&owner), 5_000_000_000);
    }
}
