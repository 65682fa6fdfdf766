//! Data model for ledger export conversion.
//!
//! - [`ColumnSchema`]: the ordered list of required output columns
//! - [`Record`]: one source row keyed by header text
//! - [`NormalizedRecord`]: one row aligned to a [`ColumnSchema`]
//! - [`RawInput`] / [`FileKind`]: a source buffer and how to parse it

pub mod error;
pub mod input;
pub mod record;
pub mod schema;

pub use error::{ModelError, Result};
pub use input::{CSV_EXTENSIONS, FileKind, RawInput, SPREADSHEET_EXTENSIONS};
pub use record::{NormalizedRecord, Record};
pub use schema::{ColumnSchema, GENERAL_LEDGER_COLUMNS, GENERAL_LEDGER_TRIMMED_COLUMNS};
