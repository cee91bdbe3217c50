use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse stowage configuration JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to read or write loading plan CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed loading plan record in line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Terminal cannot hold {requested} more cargo units, only {free} free positions left")]
    TerminalCapacityExceeded { requested: usize, free: usize },

    #[error("Failed to build internal domain model: {0}")]
    ModelConstructionError(String),

    #[error(transparent)]
    ConversionError(#[from] ConversionError),
}

/// Failures of the string conversions used by configuration and CLI input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Unknown planner type: {0}")]
    UnknownPlannerType(String),

    #[error("Unknown shipping company: {0}")]
    UnknownShippingCompany(String),
}

pub type Result<T> = std::result::Result<T, Error>;
