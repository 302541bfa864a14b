use crate::ids::TransactionId;
use crate::money::Amount;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Kind of ledger entry. The amount attached to a record is always the
/// magnitude moved, never signed, so transfers record one kind per side.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    InitialDeposit,
    Deposit,
    Withdraw,
    TransferOut,
    TransferIn,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        return match self {
            TransactionKind::InitialDeposit => "INITIAL_DEPOSIT",
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdraw => "WITHDRAW",
            TransactionKind::TransferOut => "TRANSFER_OUT",
            TransactionKind::TransferIn => "TRANSFER_IN",
        };
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.as_str());
    }
}

/// One immutable entry in an account's append-only history.
///
/// Records are created exactly once per balance-affecting operation by the
/// owning account, and never mutated or removed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    id: TransactionId,
    kind: TransactionKind,
    amount: Amount,
    timestamp: DateTime<Utc>,
    description: String,
}

impl TransactionRecord {
    pub(crate) fn new(kind: TransactionKind, amount: Amount, description: String) -> Self {
        return Self {
            id: TransactionId::generate(),
            kind,
            amount,
            timestamp: Utc::now(),
            description,
        };
    }

    pub fn id(&self) -> TransactionId {
        return self.id;
    }

    pub fn kind(&self) -> TransactionKind {
        return self.kind;
    }

    pub fn amount(&self) -> Amount {
        return self.amount;
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        return self.timestamp;
    }

    pub fn description(&self) -> &str {
        return &self.description;
    }

    /// Human-readable one-line rendering of the record.
    pub fn details(&self) -> String {
        return format!(
            "[{}] {} - Type: {}, Amount: ${:.2}, Description: {}",
            self.id,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.amount,
            self.description,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal_macros::dec;

    #[test]
    fn new_record_captures_fields() {
        let record = TransactionRecord::new(
            TransactionKind::Deposit,
            dec!(120.50),
            "Deposit to account".to_string(),
        );

        assert_eq!(record.kind(), TransactionKind::Deposit);
        assert_eq!(record.amount(), dec!(120.50));
        assert_eq!(record.description(), "Deposit to account");
    }

    #[test]
    fn record_ids_are_unique() {
        let record1 =
            TransactionRecord::new(TransactionKind::Deposit, dec!(1), "first".to_string());
        let record2 =
            TransactionRecord::new(TransactionKind::Deposit, dec!(1), "second".to_string());

        assert_ne!(record1.id(), record2.id());
    }

    #[test]
    fn kind_display_matches_ledger_names() {
        assert_eq!(TransactionKind::InitialDeposit.to_string(), "INITIAL_DEPOSIT");
        assert_eq!(TransactionKind::Deposit.to_string(), "DEPOSIT");
        assert_eq!(TransactionKind::Withdraw.to_string(), "WITHDRAW");
        assert_eq!(TransactionKind::TransferOut.to_string(), "TRANSFER_OUT");
        assert_eq!(TransactionKind::TransferIn.to_string(), "TRANSFER_IN");
    }

    #[test]
    fn details_renders_currency_with_two_decimals() {
        let record = TransactionRecord::new(
            TransactionKind::Withdraw,
            dec!(75),
            "Withdrawal from account".to_string(),
        );

        let details = record.details();

        assert!(details.contains("Type: WITHDRAW"));
        assert!(details.contains("Amount: $75.00"));
        assert!(details.contains("Description: Withdrawal from account"));
    }
}
