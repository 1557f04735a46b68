use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use shelfgrab_scraper::{run_scrape, write_csv, Concurrency, ListingClient, PageCount, ScrapeJob};
use tracing_subscriber::EnvFilter;

const DEFAULT_BASE_URL: &str =
    "https://www.amazon.in/s?rh=n%3A6612025031&fs=true&ref=lp_6612025031_sar";

/// Scrape marketplace product listings into a CSV.
#[derive(Debug, Parser)]
#[command(name = "shelfgrab")]
#[command(about = "Scrape paginated product listings into a CSV")]
struct Cli {
    /// Listing pages to scrape: a positive integer, or "all" to discover
    /// the total from pagination markup
    #[arg(long, default_value = "all")]
    pages: PageCount,

    /// Output CSV path
    #[arg(long, default_value = "products.csv")]
    output: PathBuf,

    /// Concurrent page workers (5, 10, or 25)
    #[arg(long, default_value_t = 10)]
    concurrency: usize,

    /// Base listing URL; the page number is appended as a query parameter
    #[arg(long, env = "SHELFGRAB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Pause per worker slot after finishing a page, in milliseconds
    #[arg(long, default_value_t = 1500)]
    page_delay_ms: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Treat a listing without pagination markup as a single page instead
    /// of aborting
    #[arg(long)]
    single_page_fallback: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // All parameter validation happens before the client exists, so an
    // invalid job never makes a network call.
    let concurrency = Concurrency::new(cli.concurrency)?;
    let job = ScrapeJob::new(cli.base_url, cli.pages, concurrency)
        .with_page_delay(Duration::from_millis(cli.page_delay_ms))
        .with_single_page_fallback(cli.single_page_fallback);

    let client = ListingClient::new(cli.timeout_secs)?;

    let records = run_scrape(&job, &client).await?;

    write_csv(&cli.output, &records)?;
    tracing::info!(
        rows = records.len(),
        path = %cli.output.display(),
        "data saved"
    );

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "shelfgrab=info,shelfgrab_scraper=info,warn",
        1 => "shelfgrab=debug,shelfgrab_scraper=debug,info",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
