use crate::domain::entities::observation::PriceObservation;
use crate::domain::error::DomainError;
use crate::domain::ports::acquisition_source::{AcquisitionSource, FetchOutput};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::{Duration, Instant};

/// Client for the data-acquisition service's `GET /prices/` endpoint.
pub struct HttpAcquisitionSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAcquisitionSource {
    /// `host` is `host:port` as configured (a scheme may be included).
    pub fn new(host: &str, timeout: Duration) -> Result<Self, DomainError> {
        let host = host.trim_end_matches('/');
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{host}")
        };
        let client = reqwest::Client::builder()
            .user_agent(concat!("gpuprices/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {e}")))?;
        Ok(Self { base_url, client })
    }

    pub fn prices_url(&self) -> String {
        format!("{}/prices/", self.base_url)
    }
}

/// Splits a JSON array into decodable observations and rejected elements.
fn decode_observations(items: Vec<serde_json::Value>) -> FetchOutput {
    let mut output = FetchOutput::default();
    for item in items {
        match serde_json::from_value::<PriceObservation>(item.clone()) {
            Ok(obs) => output.observations.push(obs),
            Err(e) => output.rejected.push(format!("{e}: {item}")),
        }
    }
    output
}

#[async_trait]
impl AcquisitionSource for HttpAcquisitionSource {
    fn name(&self) -> &str {
        "data_acquisition"
    }

    async fn fetch(&self) -> Result<FetchOutput, DomainError> {
        let url = self.prices_url();
        tracing::info!(%url, "requesting prices");
        let started = Instant::now();

        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() { "timed out" } else { "failed" };
                DomainError::Acquisition(format!("GET {url} {kind}: {e}"))
            })?;

        let status = resp.status();
        tracing::info!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "acquisition service responded"
        );

        if !status.is_success() {
            return Err(DomainError::Acquisition(format!(
                "acquisition service returned {status}"
            )));
        }

        let items: Vec<serde_json::Value> = resp
            .json()
            .await
            .map_err(|e| DomainError::Acquisition(format!("malformed response body: {e}")))?;

        Ok(decode_observations(items))
    }
}
