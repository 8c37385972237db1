use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Add-on limit exceeded: a drink takes at most {max} add-ons")]
    AddOnLimitExceeded { max: usize },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VendingError>;
