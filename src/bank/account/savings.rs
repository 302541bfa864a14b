use crate::money::{Amount, MONTHS_PER_YEAR};

use super::base::AccountBase;
use super::{AccountError, AccountKind};

use std::sync::{Mutex, MutexGuard};

use rust_decimal_macros::dec;

const DEFAULT_INTEREST_RATE: Amount = dec!(0.04);
const MINIMUM_BALANCE: Amount = dec!(500);
const MAX_MONTHLY_WITHDRAWALS: u32 = 6;

/// Savings account: higher default interest, advisory minimum balance and
/// monthly withdrawal limit.
///
/// The limits are reported, never enforced: `withdraw` does not move the
/// withdrawal counter and does not check the minimum balance. Orchestration
/// that wants the limits calls `increment_withdrawal_count` and
/// `is_maintaining_minimum_balance` itself.
#[derive(Debug)]
pub struct SavingsAccount {
    base: AccountBase,
    withdrawal_count: Mutex<u32>,
}

impl SavingsAccount {
    pub fn new(holder: &str, initial_balance: Amount) -> Result<Self, AccountError> {
        return Self::with_interest_rate(holder, initial_balance, DEFAULT_INTEREST_RATE);
    }

    pub fn with_interest_rate(
        holder: &str,
        initial_balance: Amount,
        interest_rate: Amount,
    ) -> Result<Self, AccountError> {
        let base = AccountBase::new(holder, initial_balance, interest_rate, AccountKind::Savings)?;

        return Ok(Self {
            base,
            withdrawal_count: Mutex::new(0),
        });
    }

    pub(super) fn base(&self) -> &AccountBase {
        return &self.base;
    }

    /// Applies one monthly slice of the annual rate. Not guarded against
    /// repeated calls; each call adds another month of interest.
    pub fn apply_interest(&self) {
        let rate = self.base.interest_rate();

        self.base.with_balance(|balance| {
            *balance += *balance * rate / MONTHS_PER_YEAR;
        });
    }

    pub fn is_maintaining_minimum_balance(&self) -> bool {
        return self.base.balance() >= MINIMUM_BALANCE;
    }

    pub fn minimum_balance(&self) -> Amount {
        return MINIMUM_BALANCE;
    }

    pub fn max_monthly_withdrawals(&self) -> u32 {
        return MAX_MONTHLY_WITHDRAWALS;
    }

    pub fn withdrawal_count(&self) -> u32 {
        return *self.count();
    }

    pub fn increment_withdrawal_count(&self) {
        *self.count() += 1;
    }

    /// Usually called once per month by the surrounding orchestration.
    pub fn reset_withdrawal_count(&self) {
        *self.count() = 0;
    }

    pub fn details(&self) -> String {
        return format!(
            "Savings Account Details:\n  \
             Account ID: {}\n  \
             Holder: {}\n  \
             Balance: ${:.2}\n  \
             Interest Rate: {:.2}%\n  \
             Minimum Balance: ${:.2}\n  \
             Monthly Withdrawals: {}/{}",
            self.base.id(),
            self.base.holder(),
            self.base.balance(),
            self.base.interest_rate() * dec!(100),
            MINIMUM_BALANCE,
            self.withdrawal_count(),
            MAX_MONTHLY_WITHDRAWALS,
        );
    }

    fn count(&self) -> MutexGuard<'_, u32> {
        return self
            .withdrawal_count
            .lock()
            .expect("withdrawal counter lock poisoned");
    }
}
