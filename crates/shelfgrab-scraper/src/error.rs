use thiserror::Error;

/// Failure of a single HTTP fetch. No retry policy lives at this level;
/// callers decide whether a failed fetch degrades a record, skips a page,
/// or aborts the job.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Failure to discover the maximum page index from pagination markup.
/// Fatal: discovery runs before any worker starts, so the job aborts
/// without writing output.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to fetch listing page: {0}")]
    Fetch(#[from] FetchError),

    #[error("no pagination markup found on the listing page")]
    NotFound,

    #[error("pagination element text {text:?} is not a page number")]
    Unparseable { text: String },
}

/// Invalid job parameters, rejected at construction time before any I/O.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("invalid page count {input:?}: expected \"all\" or a positive integer")]
    InvalidPages { input: String },

    #[error("invalid concurrency {requested}: must be one of {allowed:?}")]
    InvalidConcurrency { requested: usize, allowed: &'static [usize] },
}

/// Failure writing the final CSV output.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Job-level failure surfaced to the caller. Page-fetch and seller-fetch
/// errors never appear here; they are absorbed into partial results and
/// logged where they occur.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("pagination discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("invalid job configuration: {0}")]
    Job(#[from] JobError),

    #[error("failed to write output: {0}")]
    Sink(#[from] SinkError),
}
