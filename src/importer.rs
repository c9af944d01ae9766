use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Result, YnabError};
use crate::models::NormalizedRecord;
use crate::normalizer::normalize;

/// Read the OCR text file into lines. Trailing whitespace is trimmed and
/// blank lines are skipped; OCR apps leave them between screenshots.
pub fn read_lines(file_path: &Path) -> Result<Vec<String>> {
    let content = match std::fs::read_to_string(file_path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(YnabError::NotFound(file_path.display().to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    let lines: Vec<String> = content
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect();
    debug!(path = %file_path.display(), count = lines.len(), "read input lines");

    if lines.is_empty() {
        return Err(YnabError::EmptyInput(file_path.display().to_string()));
    }
    Ok(lines)
}

/// Read and normalize one input file. Nothing is written here, so a failure
/// at any step leaves no output behind.
pub fn import_file(file_path: &Path, today: NaiveDate) -> Result<Vec<NormalizedRecord>> {
    let lines = read_lines(file_path)?;
    normalize(&lines, today)
}
