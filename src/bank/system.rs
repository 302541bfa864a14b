use crate::customer::{Customer, CustomerError};
use crate::ids::CustomerId;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SystemError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),
}

/// Registry of customers. Orchestration entry point; consumes only the
/// public customer and account contracts.
#[derive(Debug, Default)]
pub struct BankingSystem {
    customers: Mutex<HashMap<CustomerId, Arc<Customer>>>,
}

impl BankingSystem {
    pub fn new() -> Self {
        return Self::default();
    }

    /// Validates and registers a new customer, returning a shared handle.
    pub fn register_customer(
        &self,
        name: &str,
        email: &str,
        phone_number: &str,
    ) -> Result<Arc<Customer>, CustomerError> {
        let customer = Arc::new(Customer::new(name, email, phone_number)?);

        log::debug!(
            "Registered customer {} ({})",
            customer.customer_id(),
            customer.name()
        );

        self.customers()
            .insert(customer.customer_id(), Arc::clone(&customer));

        return Ok(customer);
    }

    pub fn customer(&self, customer_id: &CustomerId) -> Result<Arc<Customer>, SystemError> {
        return self
            .customers()
            .get(customer_id)
            .cloned()
            .ok_or(SystemError::CustomerNotFound(*customer_id));
    }

    /// Snapshot of all registered customers, in no particular order.
    pub fn all_customers(&self) -> Vec<Arc<Customer>> {
        return self.customers().values().cloned().collect();
    }

    pub fn customer_count(&self) -> usize {
        return self.customers().len();
    }

    fn customers(&self) -> MutexGuard<'_, HashMap<CustomerId, Arc<Customer>>> {
        return self.customers.lock().expect("customer registry poisoned");
    }
}
