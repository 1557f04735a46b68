//! CSV output sink.

use std::path::Path;

use crate::error::SinkError;
use crate::types::ProductRecord;

/// Writes the full result set to `path` as UTF-8 CSV.
///
/// Emits a `title,price,rating,seller` header row followed by one row per
/// record; embedded delimiters and quotes are escaped per RFC 4180 by the
/// `csv` writer. The file is created (or truncated) only after the scrape
/// has finished — a job that aborts earlier leaves no output behind.
///
/// # Errors
///
/// Returns [`SinkError`] on any file-creation, serialization, or flush
/// failure.
pub fn write_csv(path: &Path, records: &[ProductRecord]) -> Result<(), SinkError> {
    // Header is written explicitly so an all-pages-failed run still produces
    // a well-formed (if empty) table.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(["title", "price", "rating", "seller"])?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
