use thiserror::Error;

/// Errors raised while reading listing data at the catalog boundary.
///
/// Rendering never fails; only loading does.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
