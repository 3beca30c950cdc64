//! Customer repository trait

use async_trait::async_trait;

use super::entity::{Customer, CustomerDetails, CustomerId};
use crate::domain::DomainError;
use crate::domain::user::UserId;

/// Repository for managing customers
///
/// Besides plain CRUD this carries the existence probes the business rules
/// need and the two eager-load lookups that return a [`CustomerDetails`]
/// read model instead of a bare entity.
#[async_trait]
pub trait CustomerRepository: Send + Sync + std::fmt::Debug {
    /// Get a customer by ID
    async fn get(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError>;

    /// Retrieve all customers
    async fn get_all(&self) -> Result<Vec<Customer>, DomainError>;

    /// Persist a new customer
    async fn add(&self, customer: Customer) -> Result<Customer, DomainError>;

    /// Update an existing customer; `None` when no record was updated
    async fn update(&self, customer: Customer) -> Result<Option<Customer>, DomainError>;

    /// Delete a customer by ID, returns true if deleted
    async fn delete(&self, id: &CustomerId) -> Result<bool, DomainError>;

    /// Check if a customer exists by ID
    async fn exists(&self, id: &CustomerId) -> Result<bool, DomainError>;

    /// Check if any customer is linked to the given user account
    async fn exists_by_user_id(&self, user_id: &UserId) -> Result<bool, DomainError>;

    /// Fetch a customer by ID together with its addresses
    async fn get_with_addresses(
        &self,
        id: &CustomerId,
    ) -> Result<Option<CustomerDetails>, DomainError>;

    /// Fetch a customer by user ID together with its user and addresses
    async fn get_by_user_id_with_addresses_and_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<CustomerDetails>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::address::Address;
    use crate::domain::user::User;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// Mock implementation for testing
    ///
    /// The `fail_updates` and `miss_detail_fetches` switches script the
    /// repository outcomes the service converts into failure results,
    /// including branches a live store cannot reach.
    #[derive(Debug, Default)]
    pub struct MockCustomerRepository {
        customers: RwLock<HashMap<u32, Customer>>,
        addresses: RwLock<Vec<Address>>,
        users: RwLock<HashMap<u32, User>>,
        fail_updates: bool,
        miss_detail_fetches: bool,
    }

    impl MockCustomerRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_customer(self, customer: Customer) -> Self {
            self.customers
                .write()
                .unwrap()
                .insert(customer.id().value(), customer);
            self
        }

        pub fn with_address(self, address: Address) -> Self {
            self.addresses.write().unwrap().push(address);
            self
        }

        pub fn with_user(self, user: User) -> Self {
            self.users.write().unwrap().insert(user.id().value(), user);
            self
        }

        /// Make every update report that no record was updated
        pub fn with_update_failure(mut self) -> Self {
            self.fail_updates = true;
            self
        }

        /// Make eager fetches come back empty even for existing customers
        pub fn with_detail_fetch_miss(mut self) -> Self {
            self.miss_detail_fetches = true;
            self
        }

        fn assemble_details(&self, customer: Customer, include_user: bool) -> CustomerDetails {
            let addresses = self
                .addresses
                .read()
                .unwrap()
                .iter()
                .filter(|a| a.customer_id() == customer.id())
                .cloned()
                .collect();

            let user = include_user
                .then(|| {
                    self.users
                        .read()
                        .unwrap()
                        .get(&customer.user_id().value())
                        .cloned()
                })
                .flatten();

            CustomerDetails {
                customer,
                addresses,
                user,
            }
        }
    }

    #[async_trait]
    impl CustomerRepository for MockCustomerRepository {
        async fn get(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
            Ok(self.customers.read().unwrap().get(&id.value()).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Customer>, DomainError> {
            Ok(self.customers.read().unwrap().values().cloned().collect())
        }

        async fn add(&self, customer: Customer) -> Result<Customer, DomainError> {
            let mut customers = self.customers.write().unwrap();

            if customers.contains_key(&customer.id().value()) {
                return Err(DomainError::conflict(format!(
                    "Customer '{}' already exists",
                    customer.id()
                )));
            }

            customers.insert(customer.id().value(), customer.clone());
            Ok(customer)
        }

        async fn update(&self, customer: Customer) -> Result<Option<Customer>, DomainError> {
            if self.fail_updates {
                return Ok(None);
            }

            let mut customers = self.customers.write().unwrap();

            if !customers.contains_key(&customer.id().value()) {
                return Ok(None);
            }

            customers.insert(customer.id().value(), customer.clone());
            Ok(Some(customer))
        }

        async fn delete(&self, id: &CustomerId) -> Result<bool, DomainError> {
            Ok(self
                .customers
                .write()
                .unwrap()
                .remove(&id.value())
                .is_some())
        }

        async fn exists(&self, id: &CustomerId) -> Result<bool, DomainError> {
            Ok(self.customers.read().unwrap().contains_key(&id.value()))
        }

        async fn exists_by_user_id(&self, user_id: &UserId) -> Result<bool, DomainError> {
            Ok(self
                .customers
                .read()
                .unwrap()
                .values()
                .any(|c| c.user_id() == user_id))
        }

        async fn get_with_addresses(
            &self,
            id: &CustomerId,
        ) -> Result<Option<CustomerDetails>, DomainError> {
            if self.miss_detail_fetches {
                return Ok(None);
            }

            let customer = self.customers.read().unwrap().get(&id.value()).cloned();
            Ok(customer.map(|c| self.assemble_details(c, false)))
        }

        async fn get_by_user_id_with_addresses_and_user(
            &self,
            user_id: &UserId,
        ) -> Result<Option<CustomerDetails>, DomainError> {
            if self.miss_detail_fetches {
                return Ok(None);
            }

            let customer = self
                .customers
                .read()
                .unwrap()
                .values()
                .find(|c| c.user_id() == user_id)
                .cloned();
            Ok(customer.map(|c| self.assemble_details(c, true)))
        }
    }
}
