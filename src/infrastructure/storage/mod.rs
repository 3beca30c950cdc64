//! Storage infrastructure - concrete backends and factory

mod factory;
mod in_memory;
mod postgres;

pub use factory::{StorageConfig, StorageFactory, StorageType};
pub use in_memory::InMemoryStorage;
pub use postgres::{PostgresConfig, PostgresStorage};
