//! Record types flowing through the pipeline.

use serde::Serialize;

/// Sentinel for any field the markup did not yield.
pub const NOT_AVAILABLE: &str = "N/A";

/// A product as extracted from a listing page, before seller resolution.
///
/// `title`/`price`/`rating` fall back to [`NOT_AVAILABLE`] individually when
/// their element is missing; a malformed card never fails the page.
/// `seller_link` is the absolute URL of the product detail page, `None` when
/// the card carries no link — in that case seller resolution is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProduct {
    pub title: String,
    pub price: String,
    pub rating: String,
    pub seller_link: Option<String>,
}

/// A completed output row. Field order matches the CSV column order.
///
/// A record is only constructed after seller resolution has been attempted
/// exactly once, so `seller` is always a name or [`NOT_AVAILABLE`], never
/// pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub title: String,
    pub price: String,
    pub rating: String,
    pub seller: String,
}

impl RawProduct {
    /// Finalizes this product with the outcome of seller resolution.
    #[must_use]
    pub fn into_record(self, seller: String) -> ProductRecord {
        ProductRecord {
            title: self.title,
            price: self.price,
            rating: self.rating,
            seller,
        }
    }
}
