//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use gpuprices::domain::entities::observation::PriceObservation;
use gpuprices::domain::entities::price::NewPrice;
use gpuprices::domain::entities::product::{NewProduct, Product};
use gpuprices::domain::error::DomainError;
use gpuprices::domain::ports::acquisition_source::{AcquisitionSource, FetchOutput};
use gpuprices::PriceService;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Acquisition source that replays a fixed batch (or a fixed failure).
pub struct StaticSource {
    observations: Mutex<Vec<PriceObservation>>,
    rejected: Vec<String>,
    fail_with: Option<String>,
    delay: Option<Duration>,
    pub calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(observations: Vec<PriceObservation>) -> Self {
        Self {
            observations: Mutex::new(observations),
            rejected: Vec::new(),
            fail_with: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::empty()
        }
    }

    pub fn with_rejected(mut self, raw: &str) -> Self {
        self.rejected.push(raw.to_string());
        self
    }

    /// Holds every fetch open for `delay`, like a slow scrape.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set(&self, observations: Vec<PriceObservation>) {
        *self.observations.lock().unwrap() = observations;
    }
}

#[async_trait]
impl AcquisitionSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<FetchOutput, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(msg) = &self.fail_with {
            return Err(DomainError::Acquisition(msg.clone()));
        }
        Ok(FetchOutput {
            observations: self.observations.lock().unwrap().clone(),
            rejected: self.rejected.clone(),
        })
    }
}

pub fn setup() -> PriceService {
    setup_with(Arc::new(StaticSource::empty()))
}

pub fn setup_with(source: Arc<dyn AcquisitionSource>) -> PriceService {
    PriceService::with_source(":memory:", source).unwrap()
}

pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 10, d, 0, 0, 0).unwrap()
}

pub fn price(amount: f64, d: u32) -> NewPrice {
    NewPrice::new(amount, day(d), "Amazon", "ASUS")
}

pub fn gpu(svc: &PriceService, model: &str) -> Product {
    svc.create_product(NewProduct::new(
        format!("GeForce RTX {model}"),
        "GPU",
        &["GeForce", "RTX", model],
    ))
    .unwrap()
}

pub fn observation(name: &str, amount: f64, date: &str, retailer: &str) -> PriceObservation {
    PriceObservation {
        name: name.to_string(),
        price: amount,
        date: date.to_string(),
        retailer: retailer.to_string(),
        manufacturer: "MSI".to_string(),
    }
}
