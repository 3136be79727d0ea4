use crate::domain::entities::product::{NewProduct, Product};
use crate::domain::error::DomainError;
use crate::domain::ports::Page;

pub trait ProductRepository: Send + Sync {
    /// Inserts the product and any initial prices as one unit.
    fn add(&self, product: &NewProduct) -> Result<Product, DomainError>;
    fn get(&self, id: i64) -> Result<Option<Product>, DomainError>;
    fn get_by_name(&self, name: &str) -> Result<Option<Product>, DomainError>;
    fn list(&self, page: &Page) -> Result<Vec<Product>, DomainError>;
    /// Removes the product and its prices. Returns the number of product rows
    /// deleted, so a missing id yields `0`.
    fn delete(&self, id: i64) -> Result<usize, DomainError>;
}
