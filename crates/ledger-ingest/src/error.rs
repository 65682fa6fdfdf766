//! Error types for source ingestion.

use thiserror::Error;

/// Errors that can occur while turning source bytes into records.
#[derive(Debug, Error)]
pub enum IngestError {
    // === CSV Parsing Errors ===
    /// The csv reader rejected the decoded text.
    #[error("failed to parse CSV: {message}")]
    CsvParse { message: String },

    // === Workbook Errors ===
    /// Bytes are not a readable workbook (corrupt or unknown format).
    #[error("failed to read workbook: {message}")]
    Workbook { message: String },

    /// The workbook opened but has no sheet to read.
    #[error("workbook contains no worksheet")]
    NoWorksheet,

    // === Decoder Configuration Errors ===
    /// An encoding label that `encoding_rs` does not recognise.
    #[error("unknown encoding label '{label}'")]
    UnknownEncoding { label: String },
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::CsvParse {
            message: err.to_string(),
        }
    }
}

impl From<calamine::Error> for IngestError {
    fn from(err: calamine::Error) -> Self {
        Self::Workbook {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
