use crate::ids::AccountId;
use crate::money::{self, Amount, AmountError};
use crate::transaction::{TransactionKind, TransactionRecord};

use super::AccountKind;

use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid transaction amount: {0}")]
    InvalidAmount(#[from] AmountError),

    #[error("Insufficient funds. Current balance: ${balance:.2}, Requested amount: ${requested:.2}")]
    InsufficientFunds { balance: Amount, requested: Amount },

    #[error("Invalid account details: {0}")]
    InvalidDetails(String),
}

/// Balance and history are guarded together: a reader holding the lock can
/// never observe a balance that its history does not explain.
#[derive(Debug)]
struct AccountState {
    balance: Amount,
    history: Vec<TransactionRecord>,
}

impl AccountState {
    fn record(&mut self, kind: TransactionKind, amount: Amount, description: String) {
        self.history
            .push(TransactionRecord::new(kind, amount, description));
    }
}

/// Behavior shared by both account variants: identity, the balance, and the
/// append-only transaction history behind one per-account lock.
#[derive(Debug)]
pub(super) struct AccountBase {
    id: AccountId,
    holder: String,
    kind: AccountKind,
    interest_rate: Amount,
    state: Mutex<AccountState>,
}

impl AccountBase {
    pub(super) fn new(
        holder: &str,
        initial_balance: Amount,
        interest_rate: Amount,
        kind: AccountKind,
    ) -> Result<Self, AccountError> {
        if holder.trim().is_empty() {
            return Err(AccountError::InvalidDetails(
                "Account holder name cannot be empty".to_string(),
            ));
        }

        if initial_balance < Amount::ZERO {
            return Err(AccountError::InvalidDetails(
                "Initial balance cannot be negative".to_string(),
            ));
        }

        let mut state = AccountState {
            balance: initial_balance,
            history: Vec::new(),
        };

        if initial_balance > Amount::ZERO {
            state.record(
                TransactionKind::InitialDeposit,
                initial_balance,
                "Account opening deposit".to_string(),
            );
        }

        return Ok(Self {
            id: AccountId::generate(),
            holder: holder.to_string(),
            kind,
            interest_rate,
            state: Mutex::new(state),
        });
    }

    pub(super) fn id(&self) -> AccountId {
        return self.id;
    }

    pub(super) fn holder(&self) -> &str {
        return &self.holder;
    }

    pub(super) fn kind(&self) -> AccountKind {
        return self.kind;
    }

    pub(super) fn interest_rate(&self) -> Amount {
        return self.interest_rate;
    }

    pub(super) fn balance(&self) -> Amount {
        return self.state().balance;
    }

    /// Snapshot of the history; the live list stays private to the account.
    pub(super) fn transaction_history(&self) -> Vec<TransactionRecord> {
        return self.state().history.clone();
    }

    pub(super) fn deposit(&self, amount: Amount) -> Result<(), AccountError> {
        money::validate_amount(amount)?;

        let mut state = self.state();

        state.balance += amount;
        state.record(
            TransactionKind::Deposit,
            amount,
            "Deposit to account".to_string(),
        );

        return Ok(());
    }

    pub(super) fn withdraw(&self, amount: Amount) -> Result<(), AccountError> {
        return self.withdraw_with_headroom(amount, Amount::ZERO);
    }

    /// `headroom` is how far below zero the balance may go: the remaining
    /// overdraft for checking accounts, zero for everything else.
    pub(super) fn withdraw_with_headroom(
        &self,
        amount: Amount,
        headroom: Amount,
    ) -> Result<(), AccountError> {
        money::validate_amount(amount)?;

        let mut state = self.state();

        if state.balance + headroom < amount {
            return Err(AccountError::InsufficientFunds {
                balance: state.balance,
                requested: amount,
            });
        }

        state.balance -= amount;
        state.record(
            TransactionKind::Withdraw,
            amount,
            "Withdrawal from account".to_string(),
        );

        return Ok(());
    }

    /// Moves `amount` into `destination`, recording one entry per side.
    ///
    /// Both state locks are taken ordered by account id, so two transfers
    /// running in opposite directions cannot deadlock, and no reader sees
    /// the debit without the credit. The source-side check is the plain
    /// balance comparison; overdraft headroom is never consulted here.
    pub(super) fn transfer_to(
        &self,
        destination: &AccountBase,
        amount: Amount,
    ) -> Result<(), AccountError> {
        money::validate_amount(amount)?;

        if self.id == destination.id {
            return self.transfer_to_self(amount);
        }

        let (first, second) = if self.id < destination.id {
            (self, destination)
        } else {
            (destination, self)
        };

        let mut first_state = first.state();
        let mut second_state = second.state();

        let (source_state, destination_state) = if first.id == self.id {
            (&mut first_state, &mut second_state)
        } else {
            (&mut second_state, &mut first_state)
        };

        if source_state.balance < amount {
            return Err(AccountError::InsufficientFunds {
                balance: source_state.balance,
                requested: amount,
            });
        }

        source_state.balance -= amount;
        source_state.record(
            TransactionKind::TransferOut,
            amount,
            format!("Transfer to {}", destination.holder),
        );

        destination_state.balance += amount;
        destination_state.record(
            TransactionKind::TransferIn,
            amount,
            format!("Transfer from {}", self.holder),
        );

        return Ok(());
    }

    // Same account on both sides: one lock, both legs, balance nets to zero.
    fn transfer_to_self(&self, amount: Amount) -> Result<(), AccountError> {
        let mut state = self.state();

        if state.balance < amount {
            return Err(AccountError::InsufficientFunds {
                balance: state.balance,
                requested: amount,
            });
        }

        state.balance -= amount;
        state.record(
            TransactionKind::TransferOut,
            amount,
            format!("Transfer to {}", self.holder),
        );

        state.balance += amount;
        state.record(
            TransactionKind::TransferIn,
            amount,
            format!("Transfer from {}", self.holder),
        );

        return Ok(());
    }

    /// Runs `f` on the balance under the state lock. Interest application
    /// goes through here so the read and the write are one critical section.
    pub(super) fn with_balance<R>(&self, f: impl FnOnce(&mut Amount) -> R) -> R {
        let mut state = self.state();
        return f(&mut state.balance);
    }

    fn state(&self) -> MutexGuard<'_, AccountState> {
        return self.state.lock().expect("account state lock poisoned");
    }
}
