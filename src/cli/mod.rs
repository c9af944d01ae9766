pub mod convert;
pub mod init;
pub mod interactive;
pub mod preview;
pub mod status;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Date that relative terms like "Yesterday" count back from.
pub(crate) fn reference_date(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

#[derive(Parser)]
#[command(
    name = "ynab-ocr",
    version,
    about = "Turn OCR'd Apple Card screenshots into a YNAB import CSV."
)]
pub struct Cli {
    /// Reference date for relative dates: YYYY-MM-DD (default: today)
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an OCR text file to CSV without prompting.
    Convert {
        /// Path to the OCR text file
        input: String,
        /// Output CSV path (default: settings default_output)
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Show the transactions a file would produce, without writing anything.
    Preview {
        /// Path to the OCR text file
        input: String,
    },
    /// Create or update the settings file.
    Init {
        /// Directory to look for input files in
        #[arg(long = "input-dir")]
        input_dir: Option<String>,
        /// Default output file name
        #[arg(long = "default-output")]
        default_output: Option<String>,
    },
    /// Show the settings file location and current values.
    Status,
}
