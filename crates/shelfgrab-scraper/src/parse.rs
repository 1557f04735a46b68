//! Listing page parser.
//!
//! Extraction is defensive throughout: every field falls back to
//! [`NOT_AVAILABLE`] when its element is missing, and a page with no
//! recognizable cards yields an empty vec. Parsing never fails — a single
//! malformed card must not cost the page, and a malformed page must not
//! cost the job.

use scraper::{ElementRef, Html};

use crate::selectors;
use crate::types::{RawProduct, NOT_AVAILABLE};

/// Extracts all product cards from a listing page body.
///
/// `base_url` anchors relative seller links; cards whose link element is
/// absent get `seller_link = None` and skip seller resolution downstream.
/// Within the returned vec, products keep their markup order.
#[must_use]
pub fn parse_listing(html: &str, base_url: &str) -> Vec<RawProduct> {
    let document = Html::parse_document(html);

    document
        .select(&selectors::PRODUCT_CARD)
        .map(|card| RawProduct {
            title: text_or_na(card, &selectors::TITLE),
            price: text_or_na(card, &selectors::PRICE),
            rating: text_or_na(card, &selectors::RATING),
            seller_link: extract_seller_link(card, base_url),
        })
        .collect()
}

/// First matching element's trimmed text, or [`NOT_AVAILABLE`].
fn text_or_na(scope: ElementRef<'_>, selector: &scraper::Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

/// Resolves the card's detail-page link to an absolute URL.
///
/// Returns `None` when the link element or its `href` is missing, or when
/// the href cannot be resolved against `base_url`.
fn extract_seller_link(card: ElementRef<'_>, base_url: &str) -> Option<String> {
    let href = card
        .select(&selectors::SELLER_LINK)
        .next()
        .and_then(|el| el.value().attr("href"))?;

    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_owned());
    }

    let base = reqwest::Url::parse(base_url).ok()?;
    base.join(href).ok().map(String::from)
}
