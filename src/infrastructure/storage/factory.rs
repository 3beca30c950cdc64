//! Storage factory for runtime backend selection

use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::storage::{Storage, StorageEntity};

use super::in_memory::InMemoryStorage;
use super::postgres::{PostgresConfig, PostgresStorage};

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres(PostgresConfig),
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates a PostgreSQL storage configuration
    pub fn postgres(config: PostgresConfig) -> Self {
        Self::Postgres(config)
    }

    /// Creates a PostgreSQL configuration from a URL
    pub fn postgres_url(url: impl Into<String>) -> Self {
        Self::Postgres(PostgresConfig::new(url))
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// Factory for creating storage instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates a storage instance based on the configuration
    pub async fn create<E>(
        config: &StorageConfig,
        table_name: &str,
    ) -> Result<Arc<dyn Storage<E>>, DomainError>
    where
        E: StorageEntity + 'static,
    {
        match config {
            StorageConfig::InMemory => Ok(Arc::new(InMemoryStorage::<E>::new())),
            StorageConfig::Postgres(pg_config) => {
                let storage = PostgresStorage::<E>::connect(pg_config, table_name).await?;
                storage.ensure_table().await?;
                Ok(Arc::new(storage))
            }
        }
    }

    /// Creates an in-memory storage
    pub fn create_in_memory<E>() -> Arc<InMemoryStorage<E>>
    where
        E: StorageEntity,
    {
        Arc::new(InMemoryStorage::new())
    }

    /// Creates a PostgreSQL storage
    pub async fn create_postgres<E>(
        config: &PostgresConfig,
        table_name: &str,
    ) -> Result<Arc<PostgresStorage<E>>, DomainError>
    where
        E: StorageEntity + 'static,
    {
        let storage = PostgresStorage::connect(config, table_name).await?;
        storage.ensure_table().await?;
        Ok(Arc::new(storage))
    }
}
