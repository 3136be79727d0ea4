use crate::domain::entities::price::{NewPrice, Price};
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Comma-joined, e.g. `GeForce,RTX,3060`.
    pub tags: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub prices: Vec<NewPrice>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, category: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            tags: tags.join(","),
            prices: Vec::new(),
        }
    }

    pub fn with_prices(mut self, prices: Vec<NewPrice>) -> Self {
        self.prices = prices;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("product name must not be empty".into()));
        }
        self.prices.iter().try_for_each(NewPrice::validate)
    }
}

/// A product together with its full price history.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithPrices {
    #[serde(flatten)]
    pub product: Product,
    pub prices: Vec<Price>,
}
