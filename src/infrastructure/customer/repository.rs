//! Storage-backed customer repository implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::address::Address;
use crate::domain::customer::{Customer, CustomerDetails, CustomerId, CustomerRepository};
use crate::domain::storage::Storage;
use crate::domain::user::{User, UserId};

/// Storage-backed implementation of [`CustomerRepository`]
///
/// Composes the customer store with the address and user stores so the
/// eager-load lookups can assemble a [`CustomerDetails`] read model in one
/// logical round-trip.
#[derive(Debug)]
pub struct StorageCustomerRepository {
    customers: Arc<dyn Storage<Customer>>,
    addresses: Arc<dyn Storage<Address>>,
    users: Arc<dyn Storage<User>>,
}

impl StorageCustomerRepository {
    /// Create a new storage-backed repository
    pub fn new(
        customers: Arc<dyn Storage<Customer>>,
        addresses: Arc<dyn Storage<Address>>,
        users: Arc<dyn Storage<User>>,
    ) -> Self {
        Self {
            customers,
            addresses,
            users,
        }
    }

    async fn addresses_of(&self, id: &CustomerId) -> Result<Vec<Address>, DomainError> {
        let all = self.addresses.list().await?;
        Ok(all
            .into_iter()
            .filter(|a| a.customer_id() == id)
            .collect())
    }
}

#[async_trait]
impl CustomerRepository for StorageCustomerRepository {
    async fn get(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        self.customers.get(id).await
    }

    async fn get_all(&self) -> Result<Vec<Customer>, DomainError> {
        self.customers.list().await
    }

    async fn add(&self, customer: Customer) -> Result<Customer, DomainError> {
        self.customers.create(customer).await
    }

    async fn update(&self, customer: Customer) -> Result<Option<Customer>, DomainError> {
        if !self.customers.exists(customer.id()).await? {
            return Ok(None);
        }

        // The record can vanish between the probe and the write; that is
        // still "no record updated", not an infrastructure fault.
        match self.customers.update(customer).await {
            Ok(updated) => Ok(Some(updated)),
            Err(DomainError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, id: &CustomerId) -> Result<bool, DomainError> {
        self.customers.delete(id).await
    }

    async fn exists(&self, id: &CustomerId) -> Result<bool, DomainError> {
        self.customers.exists(id).await
    }

    async fn exists_by_user_id(&self, user_id: &UserId) -> Result<bool, DomainError> {
        let all = self.customers.list().await?;
        Ok(all.iter().any(|c| c.user_id() == user_id))
    }

    async fn get_with_addresses(
        &self,
        id: &CustomerId,
    ) -> Result<Option<CustomerDetails>, DomainError> {
        let Some(customer) = self.customers.get(id).await? else {
            return Ok(None);
        };

        let addresses = self.addresses_of(customer.id()).await?;

        Ok(Some(CustomerDetails {
            customer,
            addresses,
            user: None,
        }))
    }

    async fn get_by_user_id_with_addresses_and_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<CustomerDetails>, DomainError> {
        let all = self.customers.list().await?;
        let Some(customer) = all.into_iter().find(|c| c.user_id() == user_id) else {
            return Ok(None);
        };

        let addresses = self.addresses_of(customer.id()).await?;
        let user = self.users.get(customer.user_id()).await?;

        Ok(Some(CustomerDetails {
            customer,
            addresses,
            user,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::AddressId;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_repo() -> StorageCustomerRepository {
        StorageCustomerRepository::new(
            Arc::new(InMemoryStorage::<Customer>::new()),
            Arc::new(InMemoryStorage::<Address>::new()),
            Arc::new(InMemoryStorage::<User>::new()),
        )
    }

    fn customer(id: u32, user_id: u32) -> Customer {
        Customer::new(CustomerId::new(id), UserId::new(user_id), "Ada", "Lovelace").unwrap()
    }

    fn address(id: u32, customer_id: u32) -> Address {
        Address::new(
            AddressId::new(id),
            CustomerId::new(customer_id),
            "1 Main St",
            "Ankara",
            "06000",
            "TR",
        )
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let repo = create_repo();

        repo.add(customer(1, 7)).await.unwrap();

        let fetched = repo.get(&CustomerId::new(1)).await.unwrap();
        assert_eq!(fetched.unwrap().user_id(), &UserId::new(7));
    }

    #[tokio::test]
    async fn test_get_all() {
        let repo = create_repo();

        repo.add(customer(1, 7)).await.unwrap();
        repo.add(customer(2, 8)).await.unwrap();

        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_existing() {
        let repo = create_repo();

        repo.add(customer(1, 7)).await.unwrap();

        let mut changed = repo.get(&CustomerId::new(1)).await.unwrap().unwrap();
        changed.set_first_name("Grace").unwrap();

        let updated = repo.update(changed).await.unwrap();
        assert_eq!(updated.unwrap().first_name(), "Grace");
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = create_repo();

        let updated = repo.update(customer(1, 7)).await.unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_update_vanished_record_returns_none() {
        // Reports the record present, then loses it before the write lands.
        #[derive(Debug)]
        struct VanishingStore;

        #[async_trait]
        impl Storage<Customer> for VanishingStore {
            async fn get(&self, _key: &CustomerId) -> Result<Option<Customer>, DomainError> {
                Ok(None)
            }

            async fn list(&self) -> Result<Vec<Customer>, DomainError> {
                Ok(Vec::new())
            }

            async fn create(&self, entity: Customer) -> Result<Customer, DomainError> {
                Ok(entity)
            }

            async fn update(&self, entity: Customer) -> Result<Customer, DomainError> {
                Err(DomainError::not_found(format!(
                    "Entity with key '{}' not found",
                    entity.id()
                )))
            }

            async fn delete(&self, _key: &CustomerId) -> Result<bool, DomainError> {
                Ok(false)
            }

            async fn exists(&self, _key: &CustomerId) -> Result<bool, DomainError> {
                Ok(true)
            }

            async fn clear(&self) -> Result<(), DomainError> {
                Ok(())
            }
        }

        let repo = StorageCustomerRepository::new(
            Arc::new(VanishingStore),
            Arc::new(InMemoryStorage::<Address>::new()),
            Arc::new(InMemoryStorage::<User>::new()),
        );

        let updated = repo.update(customer(1, 7)).await.unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_delete_and_exists() {
        let repo = create_repo();

        repo.add(customer(1, 7)).await.unwrap();
        assert!(repo.exists(&CustomerId::new(1)).await.unwrap());

        assert!(repo.delete(&CustomerId::new(1)).await.unwrap());
        assert!(!repo.exists(&CustomerId::new(1)).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_by_user_id() {
        let repo = create_repo();

        repo.add(customer(1, 7)).await.unwrap();

        assert!(repo.exists_by_user_id(&UserId::new(7)).await.unwrap());
        assert!(!repo.exists_by_user_id(&UserId::new(9)).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_with_addresses_filters_ownership() {
        let repo = create_repo();

        repo.add(customer(1, 7)).await.unwrap();
        repo.add(customer(2, 8)).await.unwrap();
        repo.addresses.create(address(1, 1)).await.unwrap();
        repo.addresses.create(address(2, 1)).await.unwrap();
        repo.addresses.create(address(3, 2)).await.unwrap();

        let details = repo
            .get_with_addresses(&CustomerId::new(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(details.addresses.len(), 2);
        assert!(details.user.is_none());
    }

    #[tokio::test]
    async fn test_get_with_addresses_missing_customer() {
        let repo = create_repo();

        let details = repo.get_with_addresses(&CustomerId::new(1)).await.unwrap();
        assert!(details.is_none());
    }

    #[tokio::test]
    async fn test_get_by_user_id_includes_user_and_addresses() {
        let repo = create_repo();

        repo.add(customer(1, 7)).await.unwrap();
        repo.addresses.create(address(1, 1)).await.unwrap();
        repo.users
            .create(User::new(UserId::new(7), "driver@example.com"))
            .await
            .unwrap();

        let details = repo
            .get_by_user_id_with_addresses_and_user(&UserId::new(7))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(details.customer.id(), &CustomerId::new(1));
        assert_eq!(details.addresses.len(), 1);
        assert_eq!(details.user.unwrap().email(), "driver@example.com");
    }

    #[tokio::test]
    async fn test_get_by_user_id_without_user_record() {
        let repo = create_repo();

        repo.add(customer(1, 7)).await.unwrap();

        let details = repo
            .get_by_user_id_with_addresses_and_user(&UserId::new(7))
            .await
            .unwrap()
            .unwrap();
        assert!(details.user.is_none());
    }
}
