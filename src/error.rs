use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read delimited record file: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Malformed record file: {0}")]
    MalformedRecord(String),
}

pub type Result<T> = std::result::Result<T, Error>;
