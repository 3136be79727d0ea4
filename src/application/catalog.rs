use crate::domain::entities::source_url::SourceUrl;
use crate::domain::error::DomainError;
use crate::domain::ports::url_repository::UrlRepository;
use std::sync::Arc;

pub struct CatalogUseCase {
    urls: Arc<dyn UrlRepository>,
}

impl CatalogUseCase {
    pub fn new(urls: Arc<dyn UrlRepository>) -> Self {
        Self { urls }
    }

    pub fn urls(&self) -> Result<Vec<SourceUrl>, DomainError> {
        self.urls.list()
    }

    pub fn retailers(&self) -> Result<Vec<String>, DomainError> {
        self.urls.retailers()
    }
}
