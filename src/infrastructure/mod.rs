//! Infrastructure layer - concrete repositories, services and backends

pub mod address;
pub mod customer;
pub mod logging;
pub mod storage;
