use crate::domain::entities::product::{NewProduct, Product, ProductWithPrices};
use crate::domain::error::DomainError;
use crate::domain::ports::price_repository::PriceRepository;
use crate::domain::ports::product_repository::ProductRepository;
use crate::domain::ports::Page;
use std::sync::Arc;

pub struct ProductUseCase {
    products: Arc<dyn ProductRepository>,
    prices: Arc<dyn PriceRepository>,
}

impl ProductUseCase {
    pub fn new(products: Arc<dyn ProductRepository>, prices: Arc<dyn PriceRepository>) -> Self {
        Self { products, prices }
    }

    pub fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        product.validate()?;
        if self.products.get_by_name(&product.name)?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Product with name '{}' already exists",
                product.name
            )));
        }
        let created = self.products.add(&product)?;
        tracing::info!(id = created.id, name = %created.name, "product created");
        Ok(created)
    }

    pub fn get(&self, id: i64) -> Result<Product, DomainError> {
        self.products
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Product not found: {id}")))
    }

    pub fn list(&self, page: &Page) -> Result<Vec<Product>, DomainError> {
        self.products.list(page)
    }

    pub fn list_with_prices(&self) -> Result<Vec<ProductWithPrices>, DomainError> {
        self.products
            .list(&Page::default())?
            .into_iter()
            .map(|product| {
                let prices = self.prices.list_for_product(product.id)?;
                Ok(ProductWithPrices { product, prices })
            })
            .collect()
    }

    /// Returns the number of products removed; `0` for an unknown id.
    pub fn delete(&self, id: i64) -> Result<usize, DomainError> {
        let rows = self.products.delete(id)?;
        if rows > 0 {
            tracing::info!(id, "product and its prices deleted");
        }
        Ok(rows)
    }
}
