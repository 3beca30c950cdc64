//! User entity referenced by customers
//!
//! Accounts live in an identity layer outside this slice; this module only
//! carries the shape the customer lookups read back.

use serde::{Deserialize, Serialize};

use crate::domain::storage::{StorageEntity, StorageKey};

/// User identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for UserId {}

/// User identity as seen by the customer layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
}

impl User {
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl StorageEntity for User {
    type Key = UserId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
