//! Car listing read model

use serde::{Deserialize, Serialize};

/// Car identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(u32);

impl CarId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Flat car detail projection for listings
///
/// Built by the query layer per request and handed to callers as-is;
/// never persisted. The daily price is carried in the smallest currency
/// unit to keep money out of floating point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarDetailDto {
    pub car_id: CarId,
    pub brand_name: String,
    pub color_name: String,
    pub daily_price_minor: i64,
}

impl CarDetailDto {
    pub fn new(
        car_id: CarId,
        brand_name: impl Into<String>,
        color_name: impl Into<String>,
        daily_price_minor: i64,
    ) -> Self {
        Self {
            car_id,
            brand_name: brand_name.into(),
            color_name: color_name.into(),
            daily_price_minor,
        }
    }
}
