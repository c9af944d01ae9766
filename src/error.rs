use thiserror::Error;

#[derive(Error, Debug)]
pub enum YnabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("The file does not exist, please try again: {0}")]
    NotFound(String),

    #[error("No transaction lines found in {0}")]
    EmptyInput(String),

    #[error("No transactions left after removing cashback rows")]
    NoTransactions,

    #[error(
        "Error in input file, please check: {lines} lines left after removing cashback rows, expected a multiple of 4"
    )]
    Format { lines: usize },

    #[error("Could not parse date '{0}' (expected MM/DD/YY)")]
    DateParse(String),

    #[error("Transaction {block} could not be sorted into Date/Payee/Memo/Amount: {reason}")]
    Block { block: usize, reason: String },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl YnabError {
    /// Errors caused by the input file's contents, which the interactive
    /// driver reports and then asks for another file.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::EmptyInput(_)
                | Self::NoTransactions
                | Self::Format { .. }
                | Self::DateParse(_)
                | Self::Block { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, YnabError>;
