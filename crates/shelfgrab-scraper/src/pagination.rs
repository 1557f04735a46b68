//! Maximum page discovery from pagination markup.
//!
//! The site renders the current/maximum page number as a non-link pagination
//! element while every other page number is an anchor. The last such element
//! on the first listing page is therefore the total page count.

use scraper::Html;

use crate::client::ListingClient;
use crate::error::DiscoveryError;
use crate::selectors;

/// Fetches the base listing URL once and extracts the maximum page index.
///
/// # Errors
///
/// - [`DiscoveryError::Fetch`] — the listing page could not be fetched.
/// - [`DiscoveryError::NotFound`] — no pagination markup on the page. A
///   single-page result set renders no pagination controls, so callers
///   decide whether that is "one page" or a hard failure (see
///   [`crate::job::ScrapeJob::single_page_fallback`]).
/// - [`DiscoveryError::Unparseable`] — the element text is not a number.
pub async fn discover_max_page(
    client: &ListingClient,
    base_url: &str,
) -> Result<u32, DiscoveryError> {
    let html = client.fetch_html(base_url).await?;
    extract_max_page(&html)
}

/// Pulls the maximum page number out of a listing page body.
fn extract_max_page(html: &str) -> Result<u32, DiscoveryError> {
    let document = Html::parse_document(html);

    let last = document
        .select(&selectors::PAGINATION_DISABLED)
        .last()
        .ok_or(DiscoveryError::NotFound)?;

    let text = last.text().collect::<String>().trim().to_owned();
    text.parse::<u32>()
        .map_err(|_| DiscoveryError::Unparseable { text })
}
