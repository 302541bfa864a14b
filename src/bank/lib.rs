pub mod account;
pub mod customer;
pub mod ids;
pub mod money;
mod result;
pub mod statement;
pub mod system;
pub mod transaction;

pub use account::{Account, AccountError, AccountKind, CheckingAccount, SavingsAccount};
pub use customer::{Customer, CustomerError};
pub use money::Amount;
pub use result::Result;
pub use system::{BankingSystem, SystemError};
pub use transaction::{TransactionKind, TransactionRecord};
