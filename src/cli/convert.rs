use std::path::PathBuf;

use chrono::NaiveDate;
use colored::Colorize;

use crate::error::Result;
use crate::importer::import_file;
use crate::settings::load_settings;
use crate::writer::write_csv;

pub fn run(input: &str, output: Option<&str>, today: NaiveDate) -> Result<()> {
    let settings = load_settings();
    let records = import_file(&settings.resolve_input(input), today)?;

    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&settings.default_output));
    write_csv(&path, &records)?;

    println!(
        "{}",
        format!("{} transactions written to {}", records.len(), path.display()).green()
    );
    Ok(())
}
