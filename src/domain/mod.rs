//! Domain layer - entities, business contracts and outcome types

pub mod address;
pub mod car;
pub mod customer;
mod error;
pub mod result;
pub mod rules;
pub mod storage;
pub mod user;

pub use error::DomainError;
pub use result::{DataResult, OpResult};
