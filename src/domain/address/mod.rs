//! Address domain - customer-owned postal addresses

mod entity;
mod repository;

pub use entity::{Address, AddressId};
pub use repository::AddressRepository;
