use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;
use crate::headers::random_user_agent;

/// HTTP client for listing and product-detail pages.
///
/// Performs single GET requests with a freshly randomized `User-Agent` per
/// call and classifies the outcome as a typed [`FetchError`]. Deliberately
/// retry-free: whether a failed fetch skips a page, degrades a record, or
/// aborts the job is the caller's policy, not the transport's.
pub struct ListingClient {
    client: Client,
}

impl ListingClient {
    /// Creates a `ListingClient` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the HTML body of `url`.
    ///
    /// Each call sends its own randomized `User-Agent`; no header state is
    /// shared across calls, so concurrent fetches need no synchronization.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Status`] — any non-2xx response.
    /// - [`FetchError::Transport`] — connection, TLS, or timeout failure.
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, random_user_agent())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}
