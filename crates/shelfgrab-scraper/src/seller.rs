//! Seller resolution from product detail pages.
//!
//! The seller name is only trusted when the availability indicator reads
//! exactly [`IN_STOCK_MARKER`]; out-of-stock and third-party-delayed
//! listings show a different seller than the one that will fulfil. Every
//! failure mode here degrades to `"N/A"` — one bad seller lookup must not
//! fail its page, let alone the job.

use scraper::Html;

use crate::client::ListingClient;
use crate::selectors;
use crate::types::NOT_AVAILABLE;

/// Exact availability text required before seller extraction is attempted.
pub const IN_STOCK_MARKER: &str = "In stock";

/// Fetches a product detail page and resolves its seller name.
///
/// Returns the seller's trimmed display name when the product is in stock
/// and the seller element exists; `"N/A"` for any fetch failure,
/// out-of-stock or unrecognized availability text, or missing markup.
pub async fn resolve_seller(client: &ListingClient, product_url: &str) -> String {
    let html = match client.fetch_html(product_url).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(url = product_url, error = %err, "seller page fetch failed");
            return NOT_AVAILABLE.to_owned();
        }
    };

    extract_seller(&html)
}

/// Extracts the seller name from a detail page body, gated on availability.
fn extract_seller(html: &str) -> String {
    let document = Html::parse_document(html);

    let availability = document
        .select(&selectors::AVAILABILITY)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned());

    if availability != IN_STOCK_MARKER {
        return NOT_AVAILABLE.to_owned();
    }

    document
        .select(&selectors::SELLER_NAME)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}
