use crate::domain::entities::price::{NewPrice, Price};
use crate::domain::error::DomainError;
use crate::domain::ports::Page;

pub trait PriceRepository: Send + Sync {
    fn add(&self, product_id: i64, price: &NewPrice) -> Result<Price, DomainError>;
    fn list(&self, page: &Page) -> Result<Vec<Price>, DomainError>;
    /// Highest price first.
    fn list_for_product(&self, product_id: i64) -> Result<Vec<Price>, DomainError>;
    /// Cheapest strictly positive price.
    fn lowest_for_product(&self, product_id: i64) -> Result<Option<Price>, DomainError>;
    fn delete(&self, id: i64) -> Result<usize, DomainError>;
}
