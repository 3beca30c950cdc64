//! Address entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerId;
use crate::domain::storage::{StorageEntity, StorageKey};

/// Address identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(u32);

impl AddressId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for AddressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for AddressId {}

/// Postal address owned by exactly one customer
///
/// The data-access layer does no domain validation on address fields beyond
/// generic CRUD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    id: AddressId,
    customer_id: CustomerId,
    line: String,
    city: String,
    postal_code: String,
    country: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Address {
    pub fn new(
        id: AddressId,
        customer_id: CustomerId,
        line: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            customer_id,
            line: line.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            country: country.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &AddressId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the address fields, keeping identity and ownership
    pub fn set_fields(
        &mut self,
        line: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) {
        self.line = line.into();
        self.city = city.into();
        self.postal_code = postal_code.into();
        self.country = country.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl StorageEntity for Address {
    type Key = AddressId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new(
            AddressId::new(1),
            CustomerId::new(10),
            "1 Main St",
            "Ankara",
            "06000",
            "TR",
        )
    }

    #[test]
    fn test_address_creation() {
        let addr = address();
        assert_eq!(addr.id().value(), 1);
        assert_eq!(addr.customer_id().value(), 10);
        assert_eq!(addr.city(), "Ankara");
        assert_eq!(addr.key(), &AddressId::new(1));
    }

    #[test]
    fn test_address_set_fields() {
        let mut addr = address();
        let original_updated = addr.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));

        addr.set_fields("2 Side St", "Izmir", "35000", "TR");
        assert_eq!(addr.line(), "2 Side St");
        assert_eq!(addr.city(), "Izmir");
        assert!(addr.updated_at() > original_updated);
        // Ownership never changes
        assert_eq!(addr.customer_id().value(), 10);
    }
}
