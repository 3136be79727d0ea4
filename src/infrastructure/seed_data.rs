//! Static starter data for an empty store.

use crate::domain::entities::price::NewPrice;
use crate::domain::entities::product::NewProduct;
use crate::domain::entities::source_url::NewSourceUrl;
use crate::domain::error::DomainError;
use chrono::NaiveDate;

const URLS_JSON: &str = include_str!("../../data/urls.json");

const MODELS: &[&str] = &["3050", "3060", "3070"];
const DEMO_PRICES: &[f64] = &[350.0, 400.0, 299.0, 600.0, 560.0];

pub fn source_urls() -> Result<Vec<NewSourceUrl>, DomainError> {
    serde_json::from_str(URLS_JSON)
        .map_err(|e| DomainError::Config(format!("embedded urls.json is invalid: {e}")))
}

/// Three RTX cards with five Amazon/ASUS prices from early October 2022,
/// dealt round-robin across the cards.
pub fn demo_products() -> Result<Vec<NewProduct>, DomainError> {
    let mut products: Vec<NewProduct> = MODELS
        .iter()
        .map(|&m| NewProduct::new(format!("GeForce RTX {m}"), "GPU", &["GeForce", "RTX", m]))
        .collect();

    for (i, &price) in DEMO_PRICES.iter().enumerate() {
        let day = i as u32 + 1;
        let date = NaiveDate::from_ymd_opt(2022, 10, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| DomainError::Config(format!("invalid demo price date 2022-10-{day}")))?
            .and_utc();
        products[i % MODELS.len()]
            .prices
            .push(NewPrice::new(price, date, "Amazon", "ASUS"));
    }
    Ok(products)
}
