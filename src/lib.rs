//! Car Rental - business and data-access layers
//!
//! Customer management for a car-rental application:
//! - Validation-guarded customer CRUD behind a success/failure result contract
//! - Address repository as a pure specialization of the generic storage layer
//! - Car detail projections for listings
//! - Pluggable storage backends (in-memory, PostgreSQL)

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use infrastructure::logging::init_logging;

use std::sync::Arc;

use domain::DomainError;
use domain::address::Address;
use domain::customer::Customer;
use domain::user::User;
use infrastructure::address::StorageAddressRepository;
use infrastructure::customer::{CustomerService, StorageCustomerRepository};
use infrastructure::storage::StorageFactory;

/// Wires a customer service against the configured storage backend
pub async fn build_customer_service(
    config: &AppConfig,
) -> Result<CustomerService<StorageCustomerRepository>, DomainError> {
    let storage_config = config.storage_config()?;

    let customers = StorageFactory::create::<Customer>(&storage_config, "customers").await?;
    let addresses = StorageFactory::create::<Address>(&storage_config, "addresses").await?;
    let users = StorageFactory::create::<User>(&storage_config, "users").await?;

    let repository = Arc::new(StorageCustomerRepository::new(customers, addresses, users));
    Ok(CustomerService::new(repository))
}

/// Wires an address repository against the configured storage backend
pub async fn build_address_repository(
    config: &AppConfig,
) -> Result<StorageAddressRepository, DomainError> {
    let storage_config = config.storage_config()?;
    let addresses = StorageFactory::create::<Address>(&storage_config, "addresses").await?;

    Ok(StorageAddressRepository::new(addresses))
}
