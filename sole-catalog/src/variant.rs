//! Display variant resolution for a listing.
//!
//! A listing is shown in exactly one of three modes. On-sale wins over
//! new-release when both would apply.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Age below which a release still counts as new.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    OnSale,
    NewRelease,
    #[default]
    Default,
}

impl Variant {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnSale => "on-sale",
            Self::NewRelease => "new-release",
            Self::Default => "default",
        }
    }

    #[must_use]
    pub const fn is_on_sale(self) -> bool {
        matches!(self, Self::OnSale)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `release_date` falls inside the new-release window ending at `now`.
///
/// Dates after `now` count as new; an absent date never does.
#[must_use]
pub fn is_new_release(release_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    release_date.is_some_and(|released| now - released < Duration::days(NEW_RELEASE_WINDOW_DAYS))
}

/// Pick the display variant for a listing as of `now`.
///
/// `price` does not take part in the decision; a present `sale_price` alone
/// marks the listing on sale.
#[must_use]
pub fn resolve_variant(
    _price: u32,
    sale_price: Option<u32>,
    release_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Variant {
    if sale_price.is_some() {
        Variant::OnSale
    } else if is_new_release(release_date, now) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}

/// [`resolve_variant`] evaluated against the current wall-clock time.
#[must_use]
pub fn resolve_variant_now(
    price: u32,
    sale_price: Option<u32>,
    release_date: Option<DateTime<Utc>>,
) -> Variant {
    resolve_variant(price, sale_price, release_date, Utc::now())
}
