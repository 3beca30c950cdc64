//! Customer validation
//!
//! The rule set applied before a customer is persisted; the service runs it
//! ahead of any repository call and turns a rejection into a failed result.

use thiserror::Error;

use crate::domain::user::UserId;

use super::entity::Customer;

/// Errors that can occur during customer validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CustomerValidationError {
    #[error("Customer must reference a user account")]
    MissingUserId,

    #[error("Customer name cannot be empty")]
    EmptyName,

    #[error("Customer name cannot exceed {0} characters")]
    NameTooLong(usize),
}

const MAX_NAME_LENGTH: usize = 50;

/// Validate the user account reference
pub fn validate_user_id(user_id: &UserId) -> Result<(), CustomerValidationError> {
    if user_id.value() == 0 {
        return Err(CustomerValidationError::MissingUserId);
    }

    Ok(())
}

/// Validate a customer profile name (first or last)
pub fn validate_customer_name(name: &str) -> Result<(), CustomerValidationError> {
    if name.is_empty() {
        return Err(CustomerValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CustomerValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a full customer entity
pub fn validate_customer(customer: &Customer) -> Result<(), CustomerValidationError> {
    validate_user_id(customer.user_id())?;
    validate_customer_name(customer.first_name())?;
    validate_customer_name(customer.last_name())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::CustomerId;

    #[test]
    fn test_valid_user_id() {
        assert!(validate_user_id(&UserId::new(1)).is_ok());
    }

    #[test]
    fn test_zero_user_id() {
        assert_eq!(
            validate_user_id(&UserId::new(0)),
            Err(CustomerValidationError::MissingUserId)
        );
    }

    #[test]
    fn test_valid_name() {
        assert!(validate_customer_name("Ayşe").is_ok());
        assert!(validate_customer_name("O'Brien").is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            validate_customer_name(""),
            Err(CustomerValidationError::EmptyName)
        );
    }

    #[test]
    fn test_name_too_long() {
        let long_name = "a".repeat(51);
        assert_eq!(
            validate_customer_name(&long_name),
            Err(CustomerValidationError::NameTooLong(50))
        );
    }

    #[test]
    fn test_validate_customer_passes_valid_entity() {
        let customer =
            Customer::new(CustomerId::new(1), UserId::new(7), "Ada", "Lovelace").unwrap();
        assert!(validate_customer(&customer).is_ok());
    }
}
