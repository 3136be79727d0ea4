use serde::{Deserialize, Serialize};

/// A retailer page the acquisition service scrapes for a given model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceUrl {
    pub id: i64,
    pub name: String,
    pub retailer: String,
    pub model: String,
    pub manufacturer: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSourceUrl {
    pub name: String,
    pub retailer: String,
    pub model: String,
    pub manufacturer: String,
    pub url: String,
}
