//! Contribution ledger state machine
//!
//! One ledger per deployment. Owner and price source are fixed at
//! construction; `fund` grows the funder records and balance,
//! `withdraw`/`cheaper_withdraw` clear them and pay the owner.
//!
//! Between operations the funder map always sums to the balance, and every
//! funder in the list has a map entry. Withdrawals clear state before the
//! external payout so a sink calling back in observes an empty ledger; a
//! failed payout restores everything.

use std::collections::HashMap;
use std::sync::Arc;

use coffer_core::{Address, Error, LedgerError, NanoCoin, NanoUsd, Result};
use price_feed::{to_usd, PriceSource};

use crate::payout::PayoutSink;

/// The contribution ledger
pub struct Ledger {
    owner: Address,
    price_feed: Arc<dyn PriceSource>,
    minimum_usd: NanoUsd,
    funders: Vec<Address>,
    funded: HashMap<Address, NanoCoin>,
    balance: NanoCoin,
}

impl Ledger {
    /// Create an open ledger with no contribution state
    pub fn new(owner: Address, price_feed: Arc<dyn PriceSource>, minimum_usd: NanoUsd) -> Self {
        Self {
            owner,
            price_feed,
            minimum_usd,
            funders: Vec::new(),
            funded: HashMap::new(),
            balance: 0,
        }
    }

    /// Accept a contribution if its USD value meets the floor.
    ///
    /// On success the caller is recorded (appended to the funder list when
    /// not already present), their cumulative total grows by `amount`, and
    /// the ledger balance takes the attached value. On any failure nothing
    /// changes and the attached value is never taken.
    ///
    /// Returns the converted USD value of the contribution.
    pub fn fund(&mut self, caller: &Address, amount: NanoCoin) -> Result<NanoUsd> {
        let reading = self.price_feed.latest_price()?;
        let converted = to_usd(amount, &reading)?;

        if converted < self.minimum_usd {
            return Err(LedgerError::InsufficientContribution {
                converted,
                required: self.minimum_usd,
            }
            .into());
        }

        let prior = self.funded.get(caller).copied().unwrap_or(0);
        let (new_total, new_balance) = match (
            prior.checked_add(amount),
            self.balance.checked_add(amount),
        ) {
            (Some(t), Some(b)) => (t, b),
            _ => return Err(LedgerError::ContributionOverflow { amount }.into()),
        };

        if !self.funders.contains(caller) {
            self.funders.push(caller.clone());
        }
        self.funded.insert(caller.clone(), new_total);
        self.balance = new_balance;

        tracing::debug!(
            "Accepted {} nano from {} ({} nano-USD), balance {}",
            amount,
            caller,
            converted,
            self.balance
        );

        Ok(converted)
    }

    /// Unsolicited-value entry point.
    ///
    /// Direct transfers without an explicit `fund` call land here and go
    /// through the identical floor check.
    pub fn receive(&mut self, caller: &Address, amount: NanoCoin) -> Result<NanoUsd> {
        self.fund(caller, amount)
    }

    /// Withdraw the full balance to the owner and reset the ledger.
    ///
    /// Re-reads the shared funder list on every iteration while zeroing the
    /// map. Returns the amount paid out.
    pub fn withdraw(&mut self, caller: &Address, sink: &mut dyn PayoutSink) -> Result<NanoCoin> {
        self.ensure_owner(caller)?;

        let prior_funders = self.funders.clone();
        let prior_funded = self.funded.clone();

        for i in 0..self.funders.len() {
            let funder = self.funders[i].clone();
            self.funded.insert(funder, 0);
        }
        self.funders.clear();

        self.settle(prior_funders, prior_funded, sink)
    }

    /// Identical contract to [`withdraw`](Self::withdraw); reads the funder
    /// list into a local copy once instead of re-reading shared state per
    /// iteration.
    pub fn cheaper_withdraw(
        &mut self,
        caller: &Address,
        sink: &mut dyn PayoutSink,
    ) -> Result<NanoCoin> {
        self.ensure_owner(caller)?;

        let funders = std::mem::take(&mut self.funders);
        let prior_funded = self.funded.clone();

        for funder in &funders {
            self.funded.insert(funder.clone(), 0);
        }

        self.settle(funders, prior_funded, sink)
    }

    /// Pay the cleared balance to the owner, restoring state on failure.
    ///
    /// Caller must have already zeroed the records; `prior_*` is the state
    /// to restore if the sink rejects delivery.
    fn settle(
        &mut self,
        prior_funders: Vec<Address>,
        prior_funded: HashMap<Address, NanoCoin>,
        sink: &mut dyn PayoutSink,
    ) -> Result<NanoCoin> {
        let amount = self.balance;
        self.balance = 0;

        match sink.deliver(&self.owner, amount) {
            Ok(()) => {
                tracing::info!("Paid out {} nano to {}", amount, self.owner);
                Ok(amount)
            }
            Err(e) => {
                self.funders = prior_funders;
                self.funded = prior_funded;
                self.balance = amount;
                tracing::warn!("Payout of {} nano failed, state restored: {}", amount, e);
                Err(e.into())
            }
        }
    }

    fn ensure_owner(&self, caller: &Address) -> std::result::Result<(), Error> {
        if caller != &self.owner {
            return Err(LedgerError::NotOwner {
                caller: caller.to_string(),
            }
            .into());
        }
        Ok(())
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    pub fn price_feed(&self) -> &Arc<dyn PriceSource> {
        &self.price_feed
    }

    pub fn minimum_usd(&self) -> NanoUsd {
        self.minimum_usd
    }

    /// Funder at the given insertion position
    pub fn funder(&self, index: usize) -> Result<&Address> {
        self.funders.get(index).ok_or_else(|| {
            Error::from(LedgerError::IndexOutOfRange {
                index,
                len: self.funders.len(),
            })
        })
    }

    /// Cumulative amount contributed by an identity (zero if unknown)
    pub fn amount_funded(&self, who: &Address) -> NanoCoin {
        self.funded.get(who).copied().unwrap_or(0)
    }

    pub fn balance(&self) -> NanoCoin {
        self.balance
    }

    pub fn funder_count(&self) -> usize {
        self.funders.len()
    }

    /// Funders in insertion order
    pub fn funders(&self) -> impl Iterator<Item = &Address> {
        self.funders.iter()
    }
}
