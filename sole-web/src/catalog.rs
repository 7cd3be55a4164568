//! Web-side listing source
//!
//! Serves the catalog compiled into the bundle and re-exports the core catalog types.

pub use sole_catalog::*;

const EMBEDDED_LISTINGS: &str = include_str!("../static/data/shoes.json");

/// Listing source reading the JSON document embedded at build time
pub struct EmbeddedListings;

#[derive(Debug, thiserror::Error)]
pub enum WebCatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ListingSource for EmbeddedListings {
    type Error = WebCatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        if EMBEDDED_LISTINGS.trim().is_empty() {
            return Err(WebCatalogError::Unavailable(
                "embedded listing data is empty".to_string(),
            ));
        }
        Ok(JsonListings::new(EMBEDDED_LISTINGS).load_catalog()?)
    }
}

/// Load the catalog, logging and falling back to an empty one on failure.
#[must_use]
pub fn load_or_empty<S: ListingSource>(source: &S) -> Catalog {
    source.load_catalog().unwrap_or_else(|e| {
        log::error!("Failed to load shoe catalog: {e}");
        Catalog::default()
    })
}
