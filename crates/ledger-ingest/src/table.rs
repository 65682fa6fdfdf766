//! Parsed source table shared by the CSV and workbook readers.

use ledger_model::Record;

/// Header row and data records read from one source file.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    /// Header text in source order, blanks included.
    pub headers: Vec<String>,
    /// One record per non-blank data row, in source order.
    pub records: Vec<Record>,
    /// Data rows skipped because every cell was empty.
    pub skipped_blank_rows: usize,
}

impl SourceTable {
    /// Number of data records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Non-blank header names, in source order.
    pub fn named_headers(&self) -> impl Iterator<Item = &str> {
        self.headers
            .iter()
            .map(String::as_str)
            .filter(|header| !header.is_empty())
    }
}
