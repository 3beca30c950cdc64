//! Address repository trait
//!
//! A pure specialization of the generic storage contract for [`Address`];
//! no operation beyond plain CRUD belongs here.

use async_trait::async_trait;

use super::entity::{Address, AddressId};
use crate::domain::DomainError;

/// Repository for managing addresses
#[async_trait]
pub trait AddressRepository: Send + Sync + std::fmt::Debug {
    /// Get an address by ID
    async fn get(&self, id: &AddressId) -> Result<Option<Address>, DomainError>;

    /// Retrieve all addresses
    async fn get_all(&self) -> Result<Vec<Address>, DomainError>;

    /// Persist a new address
    async fn add(&self, address: Address) -> Result<Address, DomainError>;

    /// Update an existing address; `None` when no record was updated
    async fn update(&self, address: Address) -> Result<Option<Address>, DomainError>;

    /// Delete an address by ID, returns true if deleted
    async fn delete(&self, id: &AddressId) -> Result<bool, DomainError>;

    /// Check if an address exists
    async fn exists(&self, id: &AddressId) -> Result<bool, DomainError>;
}
