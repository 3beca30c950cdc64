//! Storage entity traits and types

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Serialize, de::DeserializeOwned};

/// Trait for types that can be used as storage keys
///
/// `Display` supplies the string form for backends that key rows by text.
pub trait StorageKey: Clone + Debug + Display + Send + Sync + Eq + Hash {}

/// Trait for types that can be stored
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// The key type for this entity
    type Key: StorageKey;

    /// Returns the entity's key
    fn key(&self) -> &Self::Key;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    struct TestKey(u32);

    impl Display for TestKey {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl StorageKey for TestKey {}

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    struct TestEntity {
        id: TestKey,
        name: String,
    }

    impl StorageEntity for TestEntity {
        type Key = TestKey;

        fn key(&self) -> &Self::Key {
            &self.id
        }
    }

    #[test]
    fn test_storage_key_display() {
        let key = TestKey(17);
        assert_eq!(key.to_string(), "17");
    }

    #[test]
    fn test_storage_entity_key() {
        let entity = TestEntity {
            id: TestKey(1),
            name: "Test".to_string(),
        };
        assert_eq!(entity.key(), &TestKey(1));
    }
}
