mod account_id;
mod customer_id;
mod transaction_id;

pub use account_id::AccountId;
pub use customer_id::CustomerId;
pub use transaction_id::TransactionId;
