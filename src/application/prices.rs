use crate::domain::entities::price::{NewPrice, Price};
use crate::domain::entities::product::Product;
use crate::domain::error::DomainError;
use crate::domain::ports::price_repository::PriceRepository;
use crate::domain::ports::product_repository::ProductRepository;
use crate::domain::ports::Page;
use std::sync::Arc;

pub struct PriceUseCase {
    products: Arc<dyn ProductRepository>,
    prices: Arc<dyn PriceRepository>,
}

impl PriceUseCase {
    pub fn new(products: Arc<dyn ProductRepository>, prices: Arc<dyn PriceRepository>) -> Self {
        Self { products, prices }
    }

    fn require_product(&self, product_id: i64) -> Result<Product, DomainError> {
        self.products
            .get(product_id)?
            .ok_or_else(|| DomainError::NotFound(format!("Product not found: {product_id}")))
    }

    pub fn add(&self, product_id: i64, price: NewPrice) -> Result<Price, DomainError> {
        price.validate()?;
        self.require_product(product_id)?;
        self.prices.add(product_id, &price)
    }

    pub fn list(&self, page: &Page) -> Result<Vec<Price>, DomainError> {
        self.prices.list(page)
    }

    /// Returns the number of rows removed; `0` for an unknown id.
    pub fn delete(&self, id: i64) -> Result<usize, DomainError> {
        self.prices.delete(id)
    }

    pub fn by_product_id(&self, product_id: i64) -> Result<Vec<Price>, DomainError> {
        self.require_product(product_id)?;
        self.prices.list_for_product(product_id)
    }

    pub fn by_product_name(&self, name: &str) -> Result<Vec<Price>, DomainError> {
        let product = self
            .products
            .get_by_name(name)?
            .ok_or_else(|| DomainError::NotFound(format!("Product not found: {name}")))?;
        self.prices.list_for_product(product.id)
    }

    /// `Ok(None)` when the product exists but has no positive price yet.
    pub fn lowest(&self, product_id: i64) -> Result<Option<Price>, DomainError> {
        self.require_product(product_id)?;
        self.prices.lowest_for_product(product_id)
    }
}
