//! Table I/O errors.

use thiserror::Error;

/// Failures while locating, reading or writing material tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported format: {0:?} (expected .csv, .xlsx or .xls)")]
    UnsupportedFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet error: {0}")]
    Excel(#[from] calamine::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "description column {requested:?} not found; available columns: {}",
        .available.join(", ")
    )]
    ColumnNotFound {
        requested: String,
        available: Vec<String>,
    },

    #[error("table has no header row")]
    NoHeader,
}
