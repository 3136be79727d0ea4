use crate::domain::entities::source_url::{NewSourceUrl, SourceUrl};
use crate::domain::error::DomainError;

pub trait UrlRepository: Send + Sync {
    fn add(&self, url: &NewSourceUrl) -> Result<SourceUrl, DomainError>;
    fn list(&self) -> Result<Vec<SourceUrl>, DomainError>;
    fn retailers(&self) -> Result<Vec<String>, DomainError>;
}
