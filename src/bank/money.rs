use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use thiserror::Error;

/// Monetary amounts are exact decimals; currency display rounds to 2 places.
pub type Amount = Decimal;

/// Upper bound for any single money-moving operation.
pub const MAX_TRANSACTION_AMOUNT: Amount = dec!(1000000);

pub(crate) const MONTHS_PER_YEAR: Amount = dec!(12);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    #[error("Transaction amount must be greater than 0")]
    NotPositive,

    #[error("Transaction amount cannot exceed $1,000,000")]
    ExceedsMaximum,
}

/// Shared validation rule for deposits, withdrawals, and transfers.
/// Checked before any mutation takes place.
pub fn validate_amount(amount: Amount) -> Result<(), AmountError> {
    if amount <= Amount::ZERO {
        return Err(AmountError::NotPositive);
    }

    if amount > MAX_TRANSACTION_AMOUNT {
        return Err(AmountError::ExceedsMaximum);
    }

    return Ok(());
}
