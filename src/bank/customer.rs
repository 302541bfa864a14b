use crate::account::Account;
use crate::ids::{AccountId, CustomerId};
use crate::money::Amount;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{NaiveDate, Utc};
use thiserror::Error;

const MAX_ACCOUNTS_PER_CUSTOMER: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomerError {
    #[error("Invalid customer details: {0}")]
    InvalidCustomerDetails(String),

    #[error("Customer can have a maximum of {} accounts", MAX_ACCOUNTS_PER_CUSTOMER)]
    AccountLimitExceeded,

    #[error("Account with ID {0} not found")]
    AccountNotFound(AccountId),
}

/// A bank customer holding up to ten accounts, keyed by account id.
///
/// Accounts are shared: the customer's map holds one reference, and callers
/// (a transfer destination, the demo orchestrator) may hold others to the
/// same `Account`.
#[derive(Debug)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    phone_number: String,
    registration_date: NaiveDate,
    accounts: Mutex<HashMap<AccountId, Arc<Account>>>,
}

/// Two customers are equal when they share an id; ids are generated unique
/// per customer, so this is identity comparison.
impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        return self.id == other.id;
    }
}

impl Customer {
    /// Registers a customer after validating the contact details.
    pub fn new(name: &str, email: &str, phone_number: &str) -> Result<Self, CustomerError> {
        if name.trim().is_empty() {
            return Err(CustomerError::InvalidCustomerDetails(
                "Customer name cannot be empty".to_string(),
            ));
        }

        if !email.contains('@') {
            return Err(CustomerError::InvalidCustomerDetails(
                "Invalid email address".to_string(),
            ));
        }

        if phone_number.trim().is_empty() {
            return Err(CustomerError::InvalidCustomerDetails(
                "Phone number cannot be empty".to_string(),
            ));
        }

        return Ok(Self {
            id: CustomerId::generate(),
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone_number.to_string(),
            registration_date: Utc::now().date_naive(),
            accounts: Mutex::new(HashMap::new()),
        });
    }

    pub fn customer_id(&self) -> CustomerId {
        return self.id;
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }

    pub fn email(&self) -> &str {
        return &self.email;
    }

    pub fn phone_number(&self) -> &str {
        return &self.phone_number;
    }

    pub fn registration_date(&self) -> NaiveDate {
        return self.registration_date;
    }

    /// Registers an account under its own id and returns that id.
    pub fn add_account(&self, account: Arc<Account>) -> Result<AccountId, CustomerError> {
        let mut accounts = self.accounts();

        if accounts.len() >= MAX_ACCOUNTS_PER_CUSTOMER {
            return Err(CustomerError::AccountLimitExceeded);
        }

        let account_id = account.account_id();
        accounts.insert(account_id, account);

        return Ok(account_id);
    }

    pub fn account(&self, account_id: &AccountId) -> Result<Arc<Account>, CustomerError> {
        return self
            .accounts()
            .get(account_id)
            .cloned()
            .ok_or(CustomerError::AccountNotFound(*account_id));
    }

    /// Removes and returns the account.
    pub fn remove_account(&self, account_id: &AccountId) -> Result<Arc<Account>, CustomerError> {
        return self
            .accounts()
            .remove(account_id)
            .ok_or(CustomerError::AccountNotFound(*account_id));
    }

    /// Snapshot of the id-to-account mapping; mutating the returned map does
    /// not touch the customer.
    pub fn all_accounts(&self) -> HashMap<AccountId, Arc<Account>> {
        return self.accounts().clone();
    }

    pub fn account_count(&self) -> usize {
        return self.accounts().len();
    }

    /// Ids of accounts whose kind matches `kind_name` case-insensitively.
    /// Order is unspecified (map iteration order).
    pub fn accounts_by_type(&self, kind_name: &str) -> Vec<AccountId> {
        return self
            .accounts()
            .iter()
            .filter(|(_, account)| account.kind().matches(kind_name))
            .map(|(account_id, _)| *account_id)
            .collect();
    }

    /// Sum of the current balances across all owned accounts.
    pub fn total_balance(&self) -> Amount {
        return self
            .accounts()
            .values()
            .map(|account| account.balance())
            .sum();
    }

    /// Human-readable customer summary.
    pub fn summary(&self) -> String {
        let accounts = self.accounts();

        let total: Amount = accounts.values().map(|account| account.balance()).sum();

        return format!(
            "Customer Summary:\n  \
             ID: {}\n  \
             Name: {}\n  \
             Email: {}\n  \
             Phone: {}\n  \
             Registration Date: {}\n  \
             Number of Accounts: {}\n  \
             Total Balance: ${:.2}",
            self.id,
            self.name,
            self.email,
            self.phone_number,
            self.registration_date,
            accounts.len(),
            total,
        );
    }

    fn accounts(&self) -> MutexGuard<'_, HashMap<AccountId, Arc<Account>>> {
        return self.accounts.lock().expect("customer account map poisoned");
    }
}
