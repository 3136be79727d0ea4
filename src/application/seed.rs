use crate::domain::error::DomainError;
use crate::domain::ports::product_repository::ProductRepository;
use crate::domain::ports::url_repository::UrlRepository;
use crate::domain::ports::Page;
use crate::infrastructure::seed_data;
use serde::Serialize;
use std::sync::Arc;

pub struct SeedUseCase {
    products: Arc<dyn ProductRepository>,
    urls: Arc<dyn UrlRepository>,
}

#[derive(Debug, Default, Serialize)]
pub struct SeedReport {
    pub products: usize,
    pub prices: usize,
    pub urls: usize,
}

impl SeedUseCase {
    pub fn new(products: Arc<dyn ProductRepository>, urls: Arc<dyn UrlRepository>) -> Self {
        Self { products, urls }
    }

    /// Fills the products and urls tables with starter data, each only if it
    /// is empty.
    pub fn seed_if_empty(&self) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();

        if self.products.list(&Page::new(0, 1))?.is_empty() {
            for product in seed_data::demo_products()? {
                self.products.add(&product)?;
                report.products += 1;
                report.prices += product.prices.len();
            }
            tracing::info!(products = report.products, prices = report.prices, "seeded products");
        }

        if self.urls.list()?.is_empty() {
            for url in seed_data::source_urls()? {
                self.urls.add(&url)?;
                report.urls += 1;
            }
            tracing::info!(urls = report.urls, "seeded source urls");
        }

        Ok(report)
    }
}
