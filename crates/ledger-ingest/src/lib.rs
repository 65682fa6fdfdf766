//! Ledger source ingestion.
//!
//! Turns raw export bytes into header-keyed [`Record`](ledger_model::Record)s.
//!
//! # Features
//!
//! - **Encoding detection**: BOM sniffing, then an ordered list of candidate
//!   encodings, then lossy UTF-8
//! - **CSV parsing**: header row, flexible row widths, empty lines skipped
//! - **Workbook reading**: first sheet only, cells captured as display text
//!
//! # Example
//!
//! ```ignore
//! use ledger_ingest::{DecoderConfig, read_source};
//! use ledger_model::RawInput;
//!
//! let input = RawInput::new("export.csv", std::fs::read("export.csv")?)?;
//! let source = read_source(&input, &DecoderConfig::default())?;
//! println!("{} rows", source.table.len());
//! ```

mod csv;
mod decode;
mod error;
mod source;
mod spreadsheet;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Decoding ===
pub use decode::{
    CleanDecodeHeuristic, DEFAULT_CANDIDATE_LABELS, DecodeConfidence, DecodedText,
    DecoderConfig, RejectMalformed, RejectReplacementChars, UTF8_BOM, UTF16LE_BOM, decode,
};

// === Parsing ===
pub use self::csv::{parse_csv_text, read_csv_bytes};
pub use source::{DecodeReport, IngestedSource, read_source};
pub use spreadsheet::{cell_text, read_workbook_bytes};
pub use table::SourceTable;
