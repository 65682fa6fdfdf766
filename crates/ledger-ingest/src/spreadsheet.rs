//! First-sheet workbook reading (XLSX, XLS, XLSB, ODS).
//!
//! Every cell is captured as display text; nothing is parsed as a number or
//! date downstream.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use tracing::debug;

use ledger_common::{format_numeric, sanitize};
use ledger_model::Record;

use crate::error::{IngestError, Result};
use crate::table::SourceTable;

/// Reads the first worksheet of an in-memory workbook.
///
/// The first non-blank row supplies the headers. Each later non-blank row
/// becomes one record; columns under a blank header are left out, and cells
/// past the end of a short row read as `""`. A header cell holding the number
/// `0` is kept as the column name `"0"`; only empty header cells are dropped.
pub fn read_workbook_bytes(bytes: &[u8]) -> Result<SourceTable> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let sheet_names = workbook.sheet_names();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::NoWorksheet)??;

    let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
    let mut skipped_blank_rows = 0usize;

    let headers = loop {
        match rows.next() {
            Some(row) if is_blank(&row) => skipped_blank_rows += 1,
            Some(row) => break row,
            None => {
                return Ok(SourceTable {
                    skipped_blank_rows,
                    ..SourceTable::default()
                });
            }
        }
    };

    let mut records = Vec::new();
    for row in rows {
        if is_blank(&row) {
            skipped_blank_rows += 1;
            continue;
        }
        records.push(build_record(&headers, &row));
    }

    debug!(
        sheet = sheet_names.first().map(String::as_str).unwrap_or(""),
        sheet_count = sheet_names.len(),
        columns = headers.len(),
        rows = records.len(),
        skipped_blank_rows,
        "read workbook"
    );

    Ok(SourceTable {
        headers,
        records,
        skipped_blank_rows,
    })
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(String::is_empty)
}

fn build_record(headers: &[String], row: &[String]) -> Record {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !header.is_empty())
        .map(|(idx, header)| {
            let value = row.get(idx).map_or("", String::as_str);
            (header.clone(), sanitize(value))
        })
        .collect()
}

/// Display text of one cell.
///
/// Numbers print as a spreadsheet shows them (`1250.5`, `7`, `3750.3`).
/// Date-formatted cells are not interpreted and print their stored serial
/// (`45306`). Errors print as their `#` code and empty cells as `""`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Float(value) => format_numeric(*value),
        Data::DateTime(value) => format_numeric(value.as_f64()),
        other => other.to_string(),
    }
}
