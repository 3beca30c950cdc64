//! Application configuration

use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::storage::{PostgresConfig, StorageConfig, StorageType};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Backend selector: "memory" or "postgres"
    pub backend: String,
    /// Connection URL for the postgres backend
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            url: "postgres://localhost/car_rental".to_string(),
            max_connections: 10,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("CARRENTAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// The storage factory configuration this app config selects
    pub fn storage_config(&self) -> Result<StorageConfig, DomainError> {
        let storage_type = StorageType::parse(&self.storage.backend).ok_or_else(|| {
            DomainError::configuration(format!(
                "Unknown storage backend '{}'",
                self.storage.backend
            ))
        })?;

        Ok(match storage_type {
            StorageType::InMemory => StorageConfig::in_memory(),
            StorageType::Postgres => StorageConfig::postgres(
                PostgresConfig::new(&self.storage.url)
                    .with_max_connections(self.storage.max_connections),
            ),
        })
    }
}
