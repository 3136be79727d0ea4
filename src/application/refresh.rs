use crate::domain::entities::observation::PriceObservation;
use crate::domain::error::DomainError;
use crate::domain::ports::acquisition_source::AcquisitionSource;
use crate::domain::ports::price_repository::PriceRepository;
use crate::domain::ports::product_repository::ProductRepository;
use crate::domain::ports::Page;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Appends freshly acquired prices to the matching products.
///
/// Each observation is inserted on its own, so one bad record never undoes the
/// rows already written. At most one run is active; a trigger that arrives
/// while a run is in flight is refused with [`DomainError::Busy`] instead of
/// queueing behind it.
pub struct RefreshPricesUseCase {
    products: Arc<dyn ProductRepository>,
    prices: Arc<dyn PriceRepository>,
    source: Arc<dyn AcquisitionSource>,
    running: Arc<Mutex<()>>,
}

/// Proof that the caller holds the single refresh slot. Dropping it frees the
/// slot.
pub struct RefreshPermit(#[allow(dead_code)] OwnedMutexGuard<()>);

#[derive(Debug, Serialize)]
pub struct RefreshReport {
    pub source: String,
    pub fetched: usize,
    pub inserted: usize,
    pub skipped: Vec<SkippedObservation>,
    pub duration_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct SkippedObservation {
    pub name: String,
    pub reason: String,
}

impl RefreshPricesUseCase {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        prices: Arc<dyn PriceRepository>,
        source: Arc<dyn AcquisitionSource>,
    ) -> Self {
        Self {
            products,
            prices,
            source,
            running: Arc::new(Mutex::new(())),
        }
    }

    pub fn try_begin(&self) -> Result<RefreshPermit, DomainError> {
        self.running
            .clone()
            .try_lock_owned()
            .map(RefreshPermit)
            .map_err(|_| {
                tracing::info!("price refresh already in progress, trigger ignored");
                DomainError::Busy("a price refresh is already in progress".into())
            })
    }

    pub async fn execute(&self) -> Result<RefreshReport, DomainError> {
        let permit = self.try_begin()?;
        self.run(permit).await
    }

    pub async fn run(&self, _permit: RefreshPermit) -> Result<RefreshReport, DomainError> {
        let started = Instant::now();

        let output = self.source.fetch().await?;
        let fetched = output.observations.len() + output.rejected.len();
        let mut skipped: Vec<SkippedObservation> = output
            .rejected
            .into_iter()
            .map(|raw| SkippedObservation {
                name: String::new(),
                reason: format!("undecodable observation: {raw}"),
            })
            .collect();

        let products = self.products.clone();
        let prices = self.prices.clone();
        let observations = output.observations;
        let (inserted, mut rejected) = tokio::task::spawn_blocking(move || {
            apply_observations(products.as_ref(), prices.as_ref(), &observations)
        })
        .await
        .map_err(|e| DomainError::Database(format!("refresh worker failed: {e}")))??;
        skipped.append(&mut rejected);

        let report = RefreshReport {
            source: self.source.name().to_string(),
            fetched,
            inserted,
            skipped,
            duration_ms: started.elapsed().as_millis() as u64,
        };
        tracing::info!(
            source = %report.source,
            fetched = report.fetched,
            inserted = report.inserted,
            skipped = report.skipped.len(),
            duration_ms = report.duration_ms,
            "price refresh finished"
        );
        Ok(report)
    }
}

/// Resolves each observation by product name and inserts it. Runs on the
/// blocking pool since every insert is a synchronous SQLite statement.
fn apply_observations(
    products: &dyn ProductRepository,
    prices: &dyn PriceRepository,
    observations: &[PriceObservation],
) -> Result<(usize, Vec<SkippedObservation>), DomainError> {
    let by_name: HashMap<String, i64> = products
        .list(&Page::default())?
        .into_iter()
        .map(|p| (p.name, p.id))
        .collect();

    let mut inserted = 0;
    let mut skipped = Vec::new();
    for obs in observations {
        let Some(&product_id) = by_name.get(&obs.name) else {
            tracing::warn!(name = %obs.name, "no product with this name, skipping observation");
            skipped.push(SkippedObservation {
                name: obs.name.clone(),
                reason: "unknown product".into(),
            });
            continue;
        };

        let outcome = obs
            .to_new_price()
            .and_then(|price| prices.add(product_id, &price));
        match outcome {
            Ok(_) => inserted += 1,
            Err(e) => {
                tracing::warn!(name = %obs.name, error = %e, "skipping observation");
                skipped.push(SkippedObservation {
                    name: obs.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok((inserted, skipped))
}
