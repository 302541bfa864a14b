mod base;
mod checking;
mod savings;

pub use base::AccountError;
pub use checking::CheckingAccount;
pub use savings::SavingsAccount;

use crate::ids::AccountId;
use crate::money::Amount;
use crate::transaction::TransactionRecord;

use base::AccountBase;

use std::fmt;

/// Discriminator for the two account shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Savings,
    Checking,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        return match self {
            AccountKind::Savings => "SAVINGS",
            AccountKind::Checking => "CHECKING",
        };
    }

    /// Case-insensitive match against the discriminator name.
    pub fn matches(&self, name: &str) -> bool {
        return self.as_str().eq_ignore_ascii_case(name);
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.as_str());
    }
}

/// Tagged variant over the two account shapes.
///
/// Deposits, transfers, and reads share the base behavior; `withdraw`,
/// `apply_interest`, and `details` dispatch on the variant. No further
/// variants are anticipated, so an enum carries the polymorphism instead of
/// a trait object.
#[derive(Debug)]
pub enum Account {
    Savings(SavingsAccount),
    Checking(CheckingAccount),
}

impl Account {
    /// Opens a savings account with the default rate.
    pub fn savings(holder: &str, initial_balance: Amount) -> Result<Self, AccountError> {
        return Ok(Account::Savings(SavingsAccount::new(
            holder,
            initial_balance,
        )?));
    }

    /// Opens a checking account with the default rate.
    pub fn checking(holder: &str, initial_balance: Amount) -> Result<Self, AccountError> {
        return Ok(Account::Checking(CheckingAccount::new(
            holder,
            initial_balance,
        )?));
    }

    pub fn account_id(&self) -> AccountId {
        return self.base().id();
    }

    pub fn holder(&self) -> &str {
        return self.base().holder();
    }

    pub fn kind(&self) -> AccountKind {
        return self.base().kind();
    }

    pub fn interest_rate(&self) -> Amount {
        return self.base().interest_rate();
    }

    pub fn balance(&self) -> Amount {
        return self.base().balance();
    }

    /// Snapshot of the ordered, append-only history.
    pub fn transaction_history(&self) -> Vec<TransactionRecord> {
        return self.base().transaction_history();
    }

    pub fn deposit(&self, amount: Amount) -> Result<(), AccountError> {
        return self.base().deposit(amount);
    }

    /// Savings withdraws against the plain balance; checking withdraws
    /// against the balance plus remaining overdraft.
    pub fn withdraw(&self, amount: Amount) -> Result<(), AccountError> {
        return match self {
            Account::Savings(account) => account.base().withdraw(amount),
            Account::Checking(account) => account.withdraw(amount),
        };
    }

    /// Moves `amount` to `destination`, appending a TRANSFER_OUT record here
    /// and a TRANSFER_IN record there. The source-side funds check is the
    /// plain balance comparison for both variants.
    pub fn transfer(&self, destination: &Account, amount: Amount) -> Result<(), AccountError> {
        return self.base().transfer_to(destination.base(), amount);
    }

    pub fn apply_interest(&self) {
        match self {
            Account::Savings(account) => account.apply_interest(),
            Account::Checking(account) => account.apply_interest(),
        }
    }

    /// Variant-specific human-readable summary.
    pub fn details(&self) -> String {
        return match self {
            Account::Savings(account) => account.details(),
            Account::Checking(account) => account.details(),
        };
    }

    pub fn as_savings(&self) -> Option<&SavingsAccount> {
        return match self {
            Account::Savings(account) => Some(account),
            Account::Checking(_) => None,
        };
    }

    pub fn as_checking(&self) -> Option<&CheckingAccount> {
        return match self {
            Account::Checking(account) => Some(account),
            Account::Savings(_) => None,
        };
    }

    fn base(&self) -> &AccountBase {
        return match self {
            Account::Savings(account) => account.base(),
            Account::Checking(account) => account.base(),
        };
    }
}

/// Two accounts are equal when they share an id; ids are generated unique
/// per account, so this is identity comparison.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        return self.account_id() == other.account_id();
    }
}

impl From<SavingsAccount> for Account {
    fn from(account: SavingsAccount) -> Self {
        return Account::Savings(account);
    }
}

impl From<CheckingAccount> for Account {
    fn from(account: CheckingAccount) -> Self {
        return Account::Checking(account);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::transaction::TransactionKind;

    use rust_decimal_macros::dec;

    const SOME_HOLDER: &str = "John Doe";
    const OTHER_HOLDER: &str = "Jane Smith";

    #[test]
    fn kind_matches_case_insensitively() {
        assert!(AccountKind::Savings.matches("SAVINGS"));
        assert!(AccountKind::Savings.matches("savings"));
        assert!(AccountKind::Checking.matches("Checking"));
        assert!(!AccountKind::Checking.matches("SAVINGS"));
    }

    #[test]
    fn withdraw_dispatches_per_variant() {
        let savings = Account::savings(SOME_HOLDER, dec!(1000)).unwrap();
        let checking = Account::checking(SOME_HOLDER, dec!(1000)).unwrap();

        // Savings stops at zero; checking continues into its overdraft.
        assert!(matches!(
            savings.withdraw(dec!(1200)),
            Err(AccountError::InsufficientFunds { .. })
        ));
        assert_eq!(savings.balance(), dec!(1000));

        checking.withdraw(dec!(1200)).unwrap();
        assert_eq!(checking.balance(), dec!(-200));
    }

    #[test]
    fn transfer_works_across_variants() {
        let savings = Account::savings(SOME_HOLDER, dec!(5000)).unwrap();
        let checking = Account::checking(OTHER_HOLDER, dec!(3000)).unwrap();

        savings.transfer(&checking, dec!(2000)).unwrap();

        assert_eq!(savings.balance(), dec!(3000));
        assert_eq!(checking.balance(), dec!(5000));

        let out = savings.transaction_history();
        assert_eq!(out.last().unwrap().kind(), TransactionKind::TransferOut);

        let into = checking.transaction_history();
        assert_eq!(into.last().unwrap().kind(), TransactionKind::TransferIn);
    }

    #[test]
    fn details_dispatches_per_variant() {
        let savings = Account::savings(SOME_HOLDER, dec!(100)).unwrap();
        let checking = Account::checking(SOME_HOLDER, dec!(100)).unwrap();

        assert!(savings.details().starts_with("Savings Account Details:"));
        assert!(checking.details().starts_with("Checking Account Details:"));
    }

    #[test]
    fn variant_accessors_return_the_concrete_shape() {
        let savings = Account::savings(SOME_HOLDER, dec!(100)).unwrap();

        assert!(savings.as_savings().is_some());
        assert!(savings.as_checking().is_none());
        assert_eq!(savings.kind(), AccountKind::Savings);
    }
}
