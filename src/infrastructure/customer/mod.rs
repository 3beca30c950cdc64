//! Customer infrastructure - repository implementation and service

mod repository;
mod service;

pub use repository::StorageCustomerRepository;
pub use service::{
    CustomerService, MSG_ACCOUNT_ALREADY_EXISTS, MSG_CUSTOMER_NOT_FOUND_FOR_PARAMETER,
    MSG_GENERIC_ERROR, MSG_NO_REGISTERED_CUSTOMERS, MSG_USER_NOT_FOUND,
};
