//! Output generation for converted ledgers.
//!
//! - [`serialize`]: normalized records to BOM-prefixed, fully quoted CSV bytes
//! - [`output_file_name`]: the `converted_YYYYMMDD.csv` naming rule
//! - [`write_output`]: persisting bytes to disk

mod csv;
mod error;
mod file;
mod naming;

pub use self::csv::{UTF8_BOM, quote_field, serialize};
pub use error::{OutputError, Result};
pub use file::{ensure_parent_dir, write_output};
pub use naming::{OUTPUT_PREFIX, output_file_name, output_file_name_today};
