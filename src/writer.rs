use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{NormalizedRecord, CSV_HEADER};
use crate::normalizer::{flatten, BLOCK_LEN};

/// Write the header row and one row per record. The header is written even
/// when there are no records.
pub fn write_records<W: Write>(writer: W, records: &[NormalizedRecord]) -> Result<()> {
    let mut wrt = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wrt.write_record(CSV_HEADER)?;
    for row in flatten(records).chunks(BLOCK_LEN) {
        wrt.write_record(row)?;
    }
    wrt.flush()?;
    Ok(())
}

/// Write records to `path`, replacing any existing file.
pub fn write_csv(path: &Path, records: &[NormalizedRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)?;
    write_records(file, records)?;
    info!(path = %path.display(), rows = records.len(), "wrote csv");
    Ok(())
}
