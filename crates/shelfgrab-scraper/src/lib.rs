pub mod client;
pub mod error;
pub mod headers;
pub mod job;
pub mod pagination;
pub mod parse;
pub mod pipeline;
pub mod selectors;
pub mod seller;
pub mod sink;
pub mod types;

pub use client::ListingClient;
pub use error::{DiscoveryError, FetchError, JobError, ScrapeError, SinkError};
pub use job::{Concurrency, PageCount, ScrapeJob};
pub use pipeline::run_scrape;
pub use sink::write_csv;
pub use types::{ProductRecord, RawProduct};
