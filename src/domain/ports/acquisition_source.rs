use crate::domain::entities::observation::PriceObservation;
use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Observations from one fetch, plus the raw elements that could not be
/// decoded as an observation.
#[derive(Debug, Default)]
pub struct FetchOutput {
    pub observations: Vec<PriceObservation>,
    pub rejected: Vec<String>,
}

/// Where fresh prices come from.
#[async_trait]
pub trait AcquisitionSource: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch the current batch. An `Err` fails the whole refresh.
    async fn fetch(&self) -> Result<FetchOutput, DomainError>;
}
