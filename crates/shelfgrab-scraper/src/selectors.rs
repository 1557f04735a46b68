//! CSS selectors for the marketplace's listing and product-detail markup.
//!
//! All structural queries used by the parser, the seller resolver, and the
//! pagination probe live here so a site markup change is a one-file fix.

use std::sync::LazyLock;

use scraper::Selector;

/// Product card container on a listing page.
pub static PRODUCT_CARD: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.a-section.a-spacing-small.puis-padding-left-small.puis-padding-right-small")
        .expect("valid selector")
});

/// Product title inside a card.
pub static TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h2.a-size-base-plus.a-spacing-none.a-color-base.a-text-normal")
        .expect("valid selector")
});

/// Whole-number price inside a card.
pub static PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-price-whole").expect("valid selector"));

/// Star-rating alt text inside a card.
pub static RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-icon-alt").expect("valid selector"));

/// Link from a card to the product detail page (where the seller lives).
pub static SELLER_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a.a-link-normal.s-line-clamp-4.s-link-style.a-text-normal")
        .expect("valid selector")
});

/// Pagination elements rendered as non-links; the site renders the current
/// and maximum page numbers this way, all other pages as anchors.
pub static PAGINATION_DISABLED: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("span.s-pagination-item.s-pagination-disabled").expect("valid selector")
});

/// Availability indicator on a product detail page.
pub static AVAILABILITY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#availability").expect("valid selector"));

/// Seller profile name on a product detail page.
pub static SELLER_NAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#sellerProfileTriggerId").expect("valid selector"));

#[cfg(test)]
mod tests {
    use super::*;

    // Forcing every LazyLock here surfaces a bad selector string as a test
    // failure instead of a panic mid-scrape.
    #[test]
    fn all_selectors_parse() {
        let _ = &*PRODUCT_CARD;
        let _ = &*TITLE;
        let _ = &*PRICE;
        let _ = &*RATING;
        let _ = &*SELLER_LINK;
        let _ = &*PAGINATION_DISABLED;
        let _ = &*AVAILABILITY;
        let _ = &*SELLER_NAME;
    }
}
