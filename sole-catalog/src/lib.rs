//! Sole & Ankle catalog domain
//!
//! Platform-agnostic listing data and display rules for the shoe catalog.
//! This crate decides *what* a product card shows; rendering lives in `sole-web`.

pub mod error;
pub mod format;
pub mod listing;
pub mod tokens;
pub mod variant;

// Re-export commonly used types
pub use error::CatalogError;
pub use format::{format_price, pluralize};
pub use listing::{Catalog, ShoeListing};
pub use tokens::{ColorToken, Weight, root_custom_properties};
pub use variant::{
    NEW_RELEASE_WINDOW_DAYS, Variant, is_new_release, resolve_variant, resolve_variant_now,
};

/// Trait for abstracting where listings come from
/// Platform-specific implementations should provide this
pub trait ListingSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every listing the catalog should display
    ///
    /// # Errors
    ///
    /// Returns an error if the listing data cannot be read or parsed.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;
}

/// Source backed by a JSON document already held in memory
pub struct JsonListings<'a> {
    json: &'a str,
}

impl<'a> JsonListings<'a> {
    #[must_use]
    pub const fn new(json: &'a str) -> Self {
        Self { json }
    }
}

impl ListingSource for JsonListings<'_> {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        let catalog = Catalog::from_json(self.json)?;
        log::debug!("loaded {} listings", catalog.len());
        Ok(catalog)
    }
}
