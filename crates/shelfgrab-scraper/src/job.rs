//! Job configuration: validated once at construction, immutable afterwards.
//!
//! Every invalid parameter is rejected here, before any network I/O — a job
//! that constructs is a job the pipeline will run to completion or fail only
//! on pagination discovery.

use std::str::FromStr;
use std::time::Duration;

use crate::error::JobError;

/// Concurrency levels the pipeline will accept. The cap keeps the outbound
/// request rate controllable against the site's throttling.
pub const ALLOWED_CONCURRENCY: &[usize] = &[5, 10, 25];

/// Delay each worker slot observes after finishing a page, before it picks
/// up the next one. Matches the site's tolerated request cadence.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(1500);

/// How many listing pages to scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCount {
    /// Discover the total via the pagination probe before workers start.
    All,
    /// Scrape exactly this many pages. Always ≥ 1.
    Exact(u32),
}

impl FromStr for PageCount {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        match s.parse::<u32>() {
            Ok(n) if n >= 1 => Ok(Self::Exact(n)),
            _ => Err(JobError::InvalidPages {
                input: s.to_owned(),
            }),
        }
    }
}

/// Validated worker-pool size. Only values in [`ALLOWED_CONCURRENCY`]
/// construct; the pool size is a hard cap, not a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concurrency(usize);

impl Concurrency {
    /// # Errors
    ///
    /// Returns [`JobError::InvalidConcurrency`] for any value outside
    /// [`ALLOWED_CONCURRENCY`].
    pub fn new(workers: usize) -> Result<Self, JobError> {
        if ALLOWED_CONCURRENCY.contains(&workers) {
            Ok(Self(workers))
        } else {
            Err(JobError::InvalidConcurrency {
                requested: workers,
                allowed: ALLOWED_CONCURRENCY,
            })
        }
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

/// One scrape run's configuration.
#[derive(Debug, Clone)]
pub struct ScrapeJob {
    pub base_url: String,
    pub pages: PageCount,
    pub concurrency: Concurrency,
    pub page_delay: Duration,
    /// Policy for a listing page with no pagination markup during
    /// discovery. `false` (the historical behavior) treats it as a hard
    /// error; `true` treats it as a single-page result set.
    pub single_page_fallback: bool,
}

impl ScrapeJob {
    #[must_use]
    pub fn new(base_url: impl Into<String>, pages: PageCount, concurrency: Concurrency) -> Self {
        Self {
            base_url: base_url.into(),
            pages,
            concurrency,
            page_delay: DEFAULT_PAGE_DELAY,
            single_page_fallback: false,
        }
    }

    #[must_use]
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    #[must_use]
    pub fn with_single_page_fallback(mut self, enabled: bool) -> Self {
        self.single_page_fallback = enabled;
        self
    }

    /// URL of one listing page. Appends the page parameter with `&` when the
    /// base already carries a query string, `?` otherwise.
    #[must_use]
    pub fn page_url(&self, page: u32) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{}page={}", self.base_url, separator, page)
    }
}
