pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::catalog::CatalogUseCase;
use crate::application::prices::PriceUseCase;
use crate::application::products::ProductUseCase;
use crate::application::refresh::{RefreshPermit, RefreshPricesUseCase, RefreshReport};
use crate::application::seed::{SeedReport, SeedUseCase};
use crate::config::Config;
use crate::domain::entities::price::{NewPrice, Price};
use crate::domain::entities::product::{NewProduct, Product, ProductWithPrices};
use crate::domain::entities::source_url::SourceUrl;
use crate::domain::error::DomainError;
use crate::domain::ports::acquisition_source::AcquisitionSource;
use crate::domain::ports::price_repository::PriceRepository;
use crate::domain::ports::product_repository::ProductRepository;
use crate::domain::ports::url_repository::UrlRepository;
use crate::domain::ports::Page;
use crate::infrastructure::acquisition::http::HttpAcquisitionSource;
use crate::infrastructure::sqlite::price_repo::SqlitePriceRepo;
use crate::infrastructure::sqlite::product_repo::SqliteProductRepo;
use crate::infrastructure::sqlite::url_repo::SqliteUrlRepo;
use crate::infrastructure::sqlite::SharedConnection;
use std::sync::Arc;

pub struct PriceService {
    product_uc: ProductUseCase,
    price_uc: PriceUseCase,
    catalog_uc: CatalogUseCase,
    refresh_uc: RefreshPricesUseCase,
    seed_uc: SeedUseCase,
}

impl PriceService {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let source = HttpAcquisitionSource::new(&config.acquisition_host, config.acquisition_timeout)?;
        Self::with_source(&config.db_path, Arc::new(source))
    }

    pub fn with_source(
        db_path: &str,
        source: Arc<dyn AcquisitionSource>,
    ) -> Result<Self, DomainError> {
        let conn = SharedConnection::open(db_path)?;

        let product_repo: Arc<dyn ProductRepository> = Arc::new(SqliteProductRepo::new(conn.clone()));
        let price_repo: Arc<dyn PriceRepository> = Arc::new(SqlitePriceRepo::new(conn.clone()));
        let url_repo: Arc<dyn UrlRepository> = Arc::new(SqliteUrlRepo::new(conn));

        Ok(Self {
            product_uc: ProductUseCase::new(product_repo.clone(), price_repo.clone()),
            price_uc: PriceUseCase::new(product_repo.clone(), price_repo.clone()),
            catalog_uc: CatalogUseCase::new(url_repo.clone()),
            refresh_uc: RefreshPricesUseCase::new(product_repo.clone(), price_repo, source),
            seed_uc: SeedUseCase::new(product_repo, url_repo),
        })
    }

    // Delegating methods
    pub fn create_product(&self, product: NewProduct) -> Result<Product, DomainError> {
        self.product_uc.create(product)
    }

    pub fn get_product(&self, id: i64) -> Result<Product, DomainError> {
        self.product_uc.get(id)
    }

    pub fn list_products(&self, page: &Page) -> Result<Vec<Product>, DomainError> {
        self.product_uc.list(page)
    }

    pub fn list_products_with_prices(&self) -> Result<Vec<ProductWithPrices>, DomainError> {
        self.product_uc.list_with_prices()
    }

    pub fn delete_product(&self, id: i64) -> Result<usize, DomainError> {
        self.product_uc.delete(id)
    }

    pub fn add_price(&self, product_id: i64, price: NewPrice) -> Result<Price, DomainError> {
        self.price_uc.add(product_id, price)
    }

    pub fn list_prices(&self, page: &Page) -> Result<Vec<Price>, DomainError> {
        self.price_uc.list(page)
    }

    pub fn delete_price(&self, id: i64) -> Result<usize, DomainError> {
        self.price_uc.delete(id)
    }

    pub fn get_prices_by_id(&self, product_id: i64) -> Result<Vec<Price>, DomainError> {
        self.price_uc.by_product_id(product_id)
    }

    pub fn get_prices_by_name(&self, name: &str) -> Result<Vec<Price>, DomainError> {
        self.price_uc.by_product_name(name)
    }

    pub fn get_lowest_price(&self, product_id: i64) -> Result<Option<Price>, DomainError> {
        self.price_uc.lowest(product_id)
    }

    pub fn list_urls(&self) -> Result<Vec<SourceUrl>, DomainError> {
        self.catalog_uc.urls()
    }

    pub fn list_retailers(&self) -> Result<Vec<String>, DomainError> {
        self.catalog_uc.retailers()
    }

    pub async fn refresh_prices(&self) -> Result<RefreshReport, DomainError> {
        self.refresh_uc.execute().await
    }

    /// Claims the refresh slot, failing with `Busy` while a run is active.
    pub fn begin_refresh(&self) -> Result<RefreshPermit, DomainError> {
        self.refresh_uc.try_begin()
    }

    pub async fn run_refresh(&self, permit: RefreshPermit) -> Result<RefreshReport, DomainError> {
        self.refresh_uc.run(permit).await
    }

    pub fn seed(&self) -> Result<SeedReport, DomainError> {
        self.seed_uc.seed_if_empty()
    }
}
