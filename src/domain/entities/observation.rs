use crate::domain::entities::price::NewPrice;
use crate::domain::error::DomainError;
use crate::domain::values::timestamp::parse_timestamp;
use serde::{Deserialize, Serialize};

/// A price as reported by the acquisition service, keyed by product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub name: String,
    pub price: f64,
    /// ISO 8601, kept raw so one bad value only rejects its own observation.
    pub date: String,
    pub retailer: String,
    pub manufacturer: String,
}

impl PriceObservation {
    pub fn to_new_price(&self) -> Result<NewPrice, DomainError> {
        let price = NewPrice {
            price: self.price,
            date: parse_timestamp(&self.date)?,
            retailer: self.retailer.clone(),
            manufacturer: self.manufacturer.clone(),
        };
        price.validate()?;
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(price: f64, date: &str) -> PriceObservation {
        PriceObservation {
            name: "GeForce RTX 3060".into(),
            price,
            date: date.into(),
            retailer: "Newegg".into(),
            manufacturer: "EVGA".into(),
        }
    }

    #[test]
    fn test_converts_fields() {
        let p = obs(329.99, "2023-01-15T09:00:00").to_new_price().unwrap();
        assert_eq!(p.price, 329.99);
        assert_eq!(p.retailer, "Newegg");
        assert_eq!(p.manufacturer, "EVGA");
        assert_eq!(p.date.to_rfc3339(), "2023-01-15T09:00:00+00:00");
    }

    #[test]
    fn test_bad_date_rejected() {
        assert!(obs(329.99, "15/01/2023").to_new_price().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(obs(-1.0, "2023-01-15").to_new_price().is_err());
    }
}
