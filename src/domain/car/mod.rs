//! Car domain - listing projections

mod dto;

pub use dto::{CarDetailDto, CarId};
