//! Credit Meter
//!
//! Per-account generation allowance. The meter is the only component that decrements
//! the balance, and it does so at most once per accepted dispatch. Increases come only
//! from the external billing collaborator through [`CreditMeter::apply_reset`].

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Remaining generations for the current billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditAccount {
    pub balance: u32,
    pub period_max: u32,
}

impl CreditAccount {
    /// A fresh period with the full allowance.
    pub fn full(period_max: u32) -> Self {
        Self {
            balance: period_max,
            period_max,
        }
    }
}

/// Gate in front of the provider. Check-and-decrement runs under one lock so concurrent
/// dispatches sharing this meter cannot both spend the last credit.
#[derive(Debug)]
pub struct CreditMeter {
    account: Mutex<CreditAccount>,
}

impl CreditMeter {
    pub fn new(account: CreditAccount) -> Self {
        Self {
            account: Mutex::new(account),
        }
    }

    /// Spend one credit and return the balance left, read under the same lock.
    /// Returns `None`, without mutating, when the balance is zero.
    pub fn consume(&self) -> Option<u32> {
        let mut account = self.account.lock();
        if account.balance == 0 {
            debug!("Credit consume rejected: balance is zero");
            return None;
        }
        account.balance -= 1;
        debug!(balance = account.balance, "Credit consumed");
        Some(account.balance)
    }

    pub fn balance(&self) -> u32 {
        self.account.lock().balance
    }

    pub fn period_max(&self) -> u32 {
        self.account.lock().period_max
    }

    pub fn snapshot(&self) -> CreditAccount {
        *self.account.lock()
    }

    /// Replace the account with the billing collaborator's view of the new period.
    /// Nothing in the generation path calls this.
    pub fn apply_reset(&self, account: CreditAccount) {
        let mut current = self.account.lock();
        info!(
            previous_balance = current.balance,
            balance = account.balance,
            period_max = account.period_max,
            "Credit account reset"
        );
        *current = account;
    }
}
