//! Customer entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{CustomerValidationError, validate_customer_name, validate_user_id};
use crate::domain::address::Address;
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::user::{User, UserId};

/// Customer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u32);

impl CustomerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for CustomerId {}

/// Customer entity
///
/// Linked one-to-one to a user account via `user_id`; the "one customer per
/// user" invariant is enforced by the service layer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    user_id: UserId,
    first_name: String,
    last_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer after validating profile fields
    pub fn new(
        id: CustomerId,
        user_id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, CustomerValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        validate_user_id(&user_id)?;
        validate_customer_name(&first_name)?;
        validate_customer_name(&last_name)?;
        let now = Utc::now();

        Ok(Self {
            id,
            user_id,
            first_name,
            last_name,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Update the first name
    pub fn set_first_name(
        &mut self,
        first_name: impl Into<String>,
    ) -> Result<(), CustomerValidationError> {
        let first_name = first_name.into();
        validate_customer_name(&first_name)?;
        self.first_name = first_name;
        self.touch();
        Ok(())
    }

    /// Update the last name
    pub fn set_last_name(
        &mut self,
        last_name: impl Into<String>,
    ) -> Result<(), CustomerValidationError> {
        let last_name = last_name.into();
        validate_customer_name(&last_name)?;
        self.last_name = last_name;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl StorageEntity for Customer {
    type Key = CustomerId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

/// Customer fetched together with its related records
///
/// The read-model rendering of an eager-load include list: the repository
/// assembles related rows in one logical round-trip instead of populating
/// lazy navigation properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub customer: Customer,
    pub addresses: Vec<Address>,
    /// Populated only by lookups whose include list names the user
    pub user: Option<User>,
}
