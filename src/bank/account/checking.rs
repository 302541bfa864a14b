use crate::money::{Amount, MONTHS_PER_YEAR};

use super::base::AccountBase;
use super::{AccountError, AccountKind};

use std::sync::{Mutex, MutexGuard};

use rust_decimal_macros::dec;

const DEFAULT_INTEREST_RATE: Amount = dec!(0.01);
const OVERDRAFT_LIMIT: Amount = dec!(500);
const OVERDRAFT_FEE_RATE: Amount = dec!(0.05);

/// Checking account: low default interest, balance allowed to run negative
/// up to a fixed overdraft limit.
///
/// `overdraft_used` is advisory: withdrawals do not refresh it. The figure
/// only changes when `update_overdraft` recomputes it from the balance, so
/// headroom calculations reflect the last explicit update.
#[derive(Debug)]
pub struct CheckingAccount {
    base: AccountBase,
    overdraft_used: Mutex<Amount>,
}

impl CheckingAccount {
    pub fn new(holder: &str, initial_balance: Amount) -> Result<Self, AccountError> {
        return Self::with_interest_rate(holder, initial_balance, DEFAULT_INTEREST_RATE);
    }

    pub fn with_interest_rate(
        holder: &str,
        initial_balance: Amount,
        interest_rate: Amount,
    ) -> Result<Self, AccountError> {
        let base = AccountBase::new(holder, initial_balance, interest_rate, AccountKind::Checking)?;

        return Ok(Self {
            base,
            overdraft_used: Mutex::new(Amount::ZERO),
        });
    }

    pub(super) fn base(&self) -> &AccountBase {
        return &self.base;
    }

    /// Overdraft-aware withdrawal: the balance may go negative as long as
    /// the remaining overdraft covers the difference.
    pub(super) fn withdraw(&self, amount: Amount) -> Result<(), AccountError> {
        let headroom = self.remaining_overdraft();
        return self.base.withdraw_with_headroom(amount, headroom);
    }

    pub fn can_withdraw_with_overdraft(&self, amount: Amount) -> bool {
        return self.base.balance() + self.remaining_overdraft() >= amount;
    }

    pub fn available_balance(&self) -> Amount {
        return self.base.balance() + self.remaining_overdraft();
    }

    pub fn overdraft_limit(&self) -> Amount {
        return OVERDRAFT_LIMIT;
    }

    pub fn overdraft_used(&self) -> Amount {
        return *self.used();
    }

    pub fn remaining_overdraft(&self) -> Amount {
        return OVERDRAFT_LIMIT - self.overdraft_used();
    }

    /// Recomputes the advisory overdraft figure from the current balance.
    pub fn update_overdraft(&self) {
        let balance = self.base.balance();

        let used = if balance < Amount::ZERO {
            -balance
        } else {
            Amount::ZERO
        };

        *self.used() = used;
    }

    /// Applies the monthly interest slice, then charges a 5% fee on any
    /// overdraft in use. Never fails, even when the fee pushes the balance
    /// further negative.
    pub fn apply_interest(&self) {
        let rate = self.base.interest_rate();
        let used = self.overdraft_used();

        self.base.with_balance(|balance| {
            *balance += *balance * rate / MONTHS_PER_YEAR;

            if used > Amount::ZERO {
                *balance -= used * OVERDRAFT_FEE_RATE;
            }
        });
    }

    pub fn details(&self) -> String {
        return format!(
            "Checking Account Details:\n  \
             Account ID: {}\n  \
             Holder: {}\n  \
             Balance: ${:.2}\n  \
             Interest Rate: {:.2}%\n  \
             Overdraft Limit: ${:.2}\n  \
             Overdraft Used: ${:.2}\n  \
             Available Balance: ${:.2}",
            self.base.id(),
            self.base.holder(),
            self.base.balance(),
            self.base.interest_rate() * dec!(100),
            OVERDRAFT_LIMIT,
            self.overdraft_used(),
            self.available_balance(),
        );
    }

    fn used(&self) -> MutexGuard<'_, Amount> {
        return self
            .overdraft_used
            .lock()
            .expect("overdraft tracker lock poisoned");
    }
}
