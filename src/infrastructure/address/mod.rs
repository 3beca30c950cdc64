//! Address infrastructure - pass-through repository

mod repository;

pub use repository::StorageAddressRepository;
