pub mod acquisition_source;
pub mod price_repository;
pub mod product_repository;
pub mod url_repository;

/// Offset/limit window for list queries. The default returns every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Page {
    #[serde(default)]
    pub skip: usize,
    pub limit: Option<usize>,
}

impl Page {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self {
            skip,
            limit: Some(limit),
        }
    }
}
