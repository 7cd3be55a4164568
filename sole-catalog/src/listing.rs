use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CatalogError;
use crate::variant::{Variant, resolve_variant};

/// A product record as supplied by the catalog data source.
///
/// Listings are read-only: they are passed in, rendered and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeListing {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    /// Regular price in cents
    #[serde(deserialize_with = "minor_units")]
    pub price: u32,
    /// Discounted price in cents, present only while the shoe is on sale
    #[serde(default, deserialize_with = "optional_minor_units")]
    pub sale_price: Option<u32>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Parse a single listing from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a required field is missing.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Display variant as of `now`.
    #[must_use]
    pub fn variant_at(&self, now: DateTime<Utc>) -> Variant {
        let variant = resolve_variant(self.price, self.sale_price, self.release_date, now);
        log::trace!("listing {} resolved to {variant}", self.slug);
        variant
    }

    /// Display variant as of the current wall-clock time.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant_at(Utc::now())
    }

    /// Navigation target for the listing's detail page, with the slug
    /// percent-encoded as a single path segment.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/shoe/{}", urlencoding::encode(&self.slug))
    }
}

/// Ordered collection of listings, as delivered by a [`crate::ListingSource`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(pub Vec<ShoeListing>);

impl Catalog {
    /// Parse a JSON array of listings.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any listing is missing a required field.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoeListing> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&ShoeListing> {
        self.0.iter().find(|listing| listing.slug == slug)
    }
}

impl From<Vec<ShoeListing>> for Catalog {
    fn from(listings: Vec<ShoeListing>) -> Self {
        Self(listings)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Whole(u32),
    Fractional(f64),
}

impl RawAmount {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn into_cents<E: serde::de::Error>(self) -> Result<u32, E> {
        match self {
            Self::Whole(cents) => Ok(cents),
            Self::Fractional(cents)
                if cents.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&cents) =>
            {
                Ok(cents as u32)
            }
            Self::Fractional(cents) => Err(E::custom(format!(
                "amount {cents} is not a whole number of cents"
            ))),
        }
    }
}

// Amounts are cents. `7999` and `7999.0` are the same price; `79.99` or a
// negative value is rejected, which fails the listing.
fn minor_units<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    RawAmount::deserialize(deserializer)?.into_cents()
}

fn optional_minor_units<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawAmount>::deserialize(deserializer)?
        .map(RawAmount::into_cents)
        .transpose()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Millis(i64),
    Fractional(f64),
    Text(String),
    Other(serde_json::Value),
}

// Anything that cannot be read as a date becomes `None`, which the resolver
// treats as "not a new release".
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawDate>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match raw {
        RawDate::Millis(ms) => Utc.timestamp_millis_opt(ms).single(),
        #[allow(clippy::cast_possible_truncation)]
        RawDate::Fractional(ms) if ms.is_finite() => Utc.timestamp_millis_opt(ms as i64).single(),
        RawDate::Text(text) => parse_date_text(text.trim()),
        RawDate::Fractional(_) => None,
        RawDate::Other(value) => {
            log::trace!("ignoring unreadable release date {value}");
            None
        }
    }))
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_json(release: &str) -> String {
        format!(
            r#"{{"slug":"tail-spin","name":"Tail Spin","imageSrc":"/assets/tail-spin.jpg","price":16500,"releaseDate":{release},"numOfColors":3}}"#
        )
    }

    #[test]
    fn parses_camel_case_fields() {
        let listing = ShoeListing::from_json(&listing_json("\"2024-03-01\"")).unwrap();
        assert_eq!(listing.slug, "tail-spin");
        assert_eq!(listing.image_src, "/assets/tail-spin.jpg");
        assert_eq!(listing.price, 16_500);
        assert_eq!(listing.sale_price, None);
        assert_eq!(listing.num_of_colors, 3);
        assert_eq!(
            listing.release_date,
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single()
        );
    }

    #[test]
    fn release_date_accepts_rfc3339_and_epoch_millis() {
        let rfc = ShoeListing::from_json(&listing_json("\"2024-03-01T12:30:00+02:00\"")).unwrap();
        assert_eq!(
            rfc.release_date,
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).single()
        );

        let millis = ShoeListing::from_json(&listing_json("1709251200000")).unwrap();
        assert_eq!(
            millis.release_date,
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single()
        );
    }

    #[test]
    fn unreadable_release_dates_become_absent() {
        for raw in ["\"last tuesday\"", "null", "true", "{}"] {
            let listing = ShoeListing::from_json(&listing_json(raw)).unwrap();
            assert_eq!(listing.release_date, None, "input {raw}");
        }
    }

    #[test]
    fn null_sale_price_is_absent() {
        let json = r#"{"slug":"s","name":"S","imageSrc":"/s.jpg","price":100,"salePrice":null,"numOfColors":1}"#;
        let listing = ShoeListing::from_json(json).unwrap();
        assert_eq!(listing.sale_price, None);
        assert_eq!(listing.release_date, None);
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let json = r#"{"slug":"s","imageSrc":"/s.jpg","price":100}"#;
        assert!(matches!(
            ShoeListing::from_json(json),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn href_targets_detail_route() {
        let listing = ShoeListing::from_json(&listing_json("\"2024-03-01\"")).unwrap();
        assert_eq!(listing.href(), "/shoe/tail-spin");
    }

    #[test]
    fn href_encodes_slug_as_one_segment() {
        let mut listing = ShoeListing::from_json(&listing_json("\"2024-03-01\"")).unwrap();
        listing.slug = "air max/2".to_string();
        assert_eq!(listing.href(), "/shoe/air%20max%2F2");
    }

    #[test]
    fn integral_float_amounts_are_cents() {
        let json = r#"{"slug":"s","name":"S","imageSrc":"/s.jpg","price":9999.0,"salePrice":7999.0,"numOfColors":1}"#;
        let listing = ShoeListing::from_json(json).unwrap();
        assert_eq!(listing.price, 9_999);
        assert_eq!(listing.sale_price, Some(7_999));
    }

    #[test]
    fn fractional_or_negative_amounts_are_rejected() {
        for price in ["79.99", "-100", "-1.0"] {
            let json = format!(
                r#"{{"slug":"s","name":"S","imageSrc":"/s.jpg","price":{price},"numOfColors":1}}"#
            );
            assert!(
                matches!(ShoeListing::from_json(&json), Err(CatalogError::Json(_))),
                "price {price}"
            );
        }
        let json = r#"{"slug":"s","name":"S","imageSrc":"/s.jpg","price":100,"salePrice":0.5,"numOfColors":1}"#;
        assert!(ShoeListing::from_json(json).is_err());
    }

    #[test]
    fn catalog_find_and_iter_preserve_order() {
        let json = format!(
            "[{},{}]",
            listing_json("\"2024-03-01\""),
            r#"{"slug":"hi-top","name":"Hi Top","imageSrc":"/h.jpg","price":9000,"numOfColors":1}"#
        );
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        let slugs: Vec<&str> = catalog.iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(slugs, ["tail-spin", "hi-top"]);
        assert_eq!(catalog.find("hi-top").map(|l| l.price), Some(9_000));
        assert!(catalog.find("nope").is_none());
    }
}
