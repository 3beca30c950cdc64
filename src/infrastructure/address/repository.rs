//! Storage-backed address repository implementation
//!
//! Pure pass-through: every method delegates 1:1 to the generic storage,
//! scoped to the [`Address`] entity. No additional logic belongs here.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::address::{Address, AddressId, AddressRepository};
use crate::domain::storage::Storage;

/// Storage-backed implementation of [`AddressRepository`]
#[derive(Debug)]
pub struct StorageAddressRepository {
    storage: Arc<dyn Storage<Address>>,
}

impl StorageAddressRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<Address>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl AddressRepository for StorageAddressRepository {
    async fn get(&self, id: &AddressId) -> Result<Option<Address>, DomainError> {
        self.storage.get(id).await
    }

    async fn get_all(&self) -> Result<Vec<Address>, DomainError> {
        self.storage.list().await
    }

    async fn add(&self, address: Address) -> Result<Address, DomainError> {
        self.storage.create(address).await
    }

    async fn update(&self, address: Address) -> Result<Option<Address>, DomainError> {
        if !self.storage.exists(address.id()).await? {
            return Ok(None);
        }

        // The record can vanish between the probe and the write; that is
        // still "no record updated", not an infrastructure fault.
        match self.storage.update(address).await {
            Ok(updated) => Ok(Some(updated)),
            Err(DomainError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, id: &AddressId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn exists(&self, id: &AddressId) -> Result<bool, DomainError> {
        self.storage.exists(id).await
    }
}
