use crate::domain::error::DomainError;
use crate::domain::values::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observed price. Never updated once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub id: i64,
    pub price: f64,
    pub date: DateTime<Utc>,
    pub retailer: String,
    pub manufacturer: String,
    pub product_id: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewPrice {
    pub price: f64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: DateTime<Utc>,
    pub retailer: String,
    pub manufacturer: String,
}

impl NewPrice {
    pub fn new(
        price: f64,
        date: DateTime<Utc>,
        retailer: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            price,
            date,
            retailer: retailer.into(),
            manufacturer: manufacturer.into(),
        }
    }

    /// Zero is allowed (the acquisition side uses it for "unavailable");
    /// negative and non-finite amounts are not.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "price must be a non-negative number, got {}",
                self.price
            )));
        }
        Ok(())
    }
}
