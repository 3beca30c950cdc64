//! Customer domain - entities, validation rules and repository contract

mod entity;
mod repository;
mod validation;

pub use entity::{Customer, CustomerDetails, CustomerId};
pub use repository::CustomerRepository;
pub use validation::{
    CustomerValidationError, validate_customer, validate_customer_name, validate_user_id,
};

#[cfg(test)]
pub use repository::mock;
