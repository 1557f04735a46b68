//! Scrape coordination: page-count resolution, the bounded worker pool, and
//! result aggregation.
//!
//! Workers never share mutable state. Each page task produces its own batch
//! of completed records and `buffer_unordered` hands finished batches to the
//! single collecting task, which owns the aggregate outright — the
//! message-passing shape of a lock-guarded shared list, without the lock.
//!
//! Failure policy is best-effort over completeness: a page that cannot be
//! fetched contributes zero records and the job proceeds, because the data
//! source throttles rather than disappears. Only pagination discovery, which
//! runs before any worker starts, can fail the job.

use std::future::Future;

use futures::stream::{self, StreamExt};

use crate::client::ListingClient;
use crate::error::{DiscoveryError, ScrapeError};
use crate::job::{PageCount, ScrapeJob};
use crate::pagination::discover_max_page;
use crate::parse::parse_listing;
use crate::seller::resolve_seller;
use crate::types::{ProductRecord, NOT_AVAILABLE};

/// Runs a scrape job end to end and returns the aggregated records.
///
/// Record order across pages is arbitrary (workers finish in any order);
/// within one page, markup order is preserved.
///
/// # Errors
///
/// Returns [`ScrapeError::Discovery`] when `PageCount::All` was requested
/// and the pagination probe fails. Page-level and seller-level failures are
/// absorbed into partial results, never returned.
pub async fn run_scrape(
    job: &ScrapeJob,
    client: &ListingClient,
) -> Result<Vec<ProductRecord>, ScrapeError> {
    let total_pages = resolve_page_count(job, client).await?;

    tracing::info!(
        total_pages,
        concurrency = job.concurrency.get(),
        "starting scrape"
    );

    let batches = run_bounded(total_pages, job.concurrency.get(), |page| async move {
        let records = scrape_page(job, client, page).await;
        // Pacing: the slot stays occupied through the delay, so a worker
        // finishing a page waits before it picks up the next one.
        if !job.page_delay.is_zero() {
            tokio::time::sleep(job.page_delay).await;
        }
        records
    })
    .await;

    let records: Vec<ProductRecord> = batches.into_iter().flatten().collect();
    tracing::info!(total_records = records.len(), "scrape complete");
    Ok(records)
}

/// Resolves the page range before any worker starts.
async fn resolve_page_count(job: &ScrapeJob, client: &ListingClient) -> Result<u32, ScrapeError> {
    match job.pages {
        PageCount::Exact(n) => Ok(n),
        PageCount::All => match discover_max_page(client, &job.base_url).await {
            Ok(max) => {
                tracing::info!(max_pages = max, "discovered pagination bound");
                Ok(max)
            }
            Err(DiscoveryError::NotFound) if job.single_page_fallback => {
                tracing::warn!("no pagination markup; treating result set as a single page");
                Ok(1)
            }
            Err(err) => {
                tracing::error!(error = %err, "pagination discovery failed; aborting job");
                Err(err.into())
            }
        },
    }
}

/// Runs `task` once per page index in `1..=total_pages` with at most `limit`
/// tasks in flight, collecting outputs in completion order.
async fn run_bounded<T, F, Fut>(total_pages: u32, limit: usize, task: F) -> Vec<T>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = T>,
{
    stream::iter(1..=total_pages)
        .map(task)
        .buffer_unordered(limit)
        .collect()
        .await
}

/// Fetches and fully processes one listing page.
///
/// Seller lookups run sequentially within the page, so total in-flight
/// connections stay bounded by the worker-pool size. Any fetch failure
/// degrades (empty page or `"N/A"` seller) instead of propagating.
async fn scrape_page(job: &ScrapeJob, client: &ListingClient, page: u32) -> Vec<ProductRecord> {
    let url = job.page_url(page);

    let html = match client.fetch_html(&url).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(page, error = %err, "page fetch failed; contributing zero records");
            return Vec::new();
        }
    };

    let raw = parse_listing(&html, &job.base_url);

    let mut records = Vec::with_capacity(raw.len());
    for product in raw {
        let seller = match product.seller_link.as_deref() {
            Some(link) => resolve_seller(client, link).await,
            None => NOT_AVAILABLE.to_owned(),
        };
        records.push(product.into_record(seller));
    }

    tracing::info!(page, products = records.len(), "scraped page");
    records
}
