// ============================================================
// APPLICATION ERRORS
// ============================================================
// Structural ingestion failures abort a matrix load; per-row
// issues are recovered by skipping and never appear here.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppError {
    /// No row qualified as the header row; carries the strategy that searched
    HeaderNotFound { strategy: String },
    /// A required header label was not present (e.g. "Part Number")
    RequiredColumnMissing(String),
    /// Header row found but no operator columns survived classification
    NoOperatorColumns,
    /// Failure reading or decoding the tabular source
    SourceRead(String),
    /// Invalid configuration or caller input
    Validation(String),
    /// Lookup target does not exist (e.g. unknown assignment id)
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::HeaderNotFound { strategy } => {
                write!(f, "Header row not found ({})", strategy)
            }
            AppError::RequiredColumnMissing(label) => {
                write!(f, "Required column missing: {}", label)
            }
            AppError::NoOperatorColumns => {
                write!(f, "No operator columns detected in header row")
            }
            AppError::SourceRead(msg) => write!(f, "Source read error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::SourceRead(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::SourceRead(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
