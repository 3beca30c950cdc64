//! Business operation outcome types
//!
//! Every manager operation reports its domain outcome through these wrappers
//! rather than through `Err`: a failed precondition or an empty query is an
//! expected business answer carrying a human-readable message, while
//! [`DomainError`](super::DomainError) is reserved for infrastructure faults.

use serde::{Deserialize, Serialize};

/// Status-only outcome of a business operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl OpResult {
    /// A successful outcome with no message
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// A failed outcome; the message is the caller-visible contract
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Outcome of a business operation carrying a payload on success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResult<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> DataResult<T> {
    /// A successful outcome wrapping a payload
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// A successful outcome whose payload may be absent
    ///
    /// Exists for lookups that report success based on a prior existence
    /// check and wrap whatever the subsequent fetch returned.
    pub fn success_opt(data: Option<T>) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// A failed outcome; never carries a payload
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consumes the result, yielding the payload if present
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
