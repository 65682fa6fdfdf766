//! Header-keyed CSV parsing of decoded text.

use ::csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use ledger_common::sanitize;
use ledger_model::Record;

use crate::decode::{DecodedText, DecoderConfig, decode};
use crate::error::Result;
use crate::table::SourceTable;

/// Decodes CSV bytes and parses them into header-keyed records.
pub fn read_csv_bytes(bytes: &[u8], config: &DecoderConfig) -> Result<(SourceTable, DecodedText)> {
    let decoded = decode(bytes, config);
    let table = parse_csv_text(&decoded.text)?;
    Ok((table, decoded))
}

/// Parses decoded CSV text.
///
/// - The first line holds the field names, kept verbatim.
/// - Empty lines are skipped.
/// - Rows may be shorter or longer than the header: missing trailing cells are
///   left out of the record, extra cells are dropped.
/// - Cell values are sanitized.
///
/// Text with no header line yields an empty table.
pub fn parse_csv_text(text: &str) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    let mut skipped_blank_rows = 0usize;
    let mut row = StringRecord::new();
    while reader.read_record(&mut row)? {
        if row.iter().all(str::is_empty) && row.len() <= 1 {
            skipped_blank_rows += 1;
            continue;
        }
        records.push(build_record(&headers, &row));
    }

    debug!(
        columns = headers.len(),
        rows = records.len(),
        skipped_blank_rows,
        "parsed CSV text"
    );

    Ok(SourceTable {
        headers,
        records,
        skipped_blank_rows,
    })
}

fn build_record(headers: &[String], row: &StringRecord) -> Record {
    headers
        .iter()
        .zip(row.iter())
        .map(|(header, value)| (header.clone(), sanitize(value)))
        .collect()
}
