//! Error types for the ledger data model.

use thiserror::Error;

/// Errors raised while building model values.
#[derive(Debug, Error)]
pub enum ModelError {
    // === Input Errors ===
    /// File suffix is not one the pipeline can read.
    #[error("unsupported file type '.{extension}' for {file_name} (expected .csv, .xlsx or .xls)")]
    UnsupportedFileKind {
        file_name: String,
        extension: String,
    },

    /// File name carries no suffix to dispatch on.
    #[error("cannot determine file type of {file_name}: no extension")]
    MissingExtension { file_name: String },

    // === Schema Errors ===
    /// A schema needs at least one column.
    #[error("column schema must contain at least one column")]
    EmptySchema,

    /// Column names in a schema must be unique.
    #[error("duplicate column '{column}' in schema")]
    DuplicateColumn { column: String },

    /// A trimmed column was named that the schema does not contain.
    #[error("column '{column}' is not part of the schema")]
    UnknownColumn { column: String },

    /// Value count does not match the schema width.
    #[error("expected {expected} values for the schema, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
