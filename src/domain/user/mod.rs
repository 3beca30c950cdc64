//! User domain - identity referenced by customers

mod entity;

pub use entity::{User, UserId};
