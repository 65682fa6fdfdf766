//! Kind-dispatched reading of a [`RawInput`].

use serde::Serialize;
use tracing::{debug, info_span};

use ledger_model::{FileKind, RawInput};

use crate::csv::read_csv_bytes;
use crate::decode::{DecodeConfidence, DecoderConfig};
use crate::error::Result;
use crate::spreadsheet::read_workbook_bytes;
use crate::table::SourceTable;

/// Encoding outcome for CSV sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    /// WHATWG name of the encoding used.
    pub encoding: String,
    pub confidence: DecodeConfidence,
}

/// A parsed source plus how its text was decoded.
#[derive(Debug, Clone)]
pub struct IngestedSource {
    pub table: SourceTable,
    /// `None` for workbooks, which carry their own encoding.
    pub decode: Option<DecodeReport>,
}

/// Reads `input` with the parser its [`FileKind`] selects.
pub fn read_source(input: &RawInput, config: &DecoderConfig) -> Result<IngestedSource> {
    let span = info_span!("read_source", file = input.file_name(), kind = %input.kind());
    let _guard = span.enter();

    let source = match input.kind() {
        FileKind::Csv => {
            let (table, decoded) = read_csv_bytes(input.bytes(), config)?;
            IngestedSource {
                table,
                decode: Some(DecodeReport {
                    encoding: decoded.encoding.name().to_string(),
                    confidence: decoded.confidence,
                }),
            }
        }
        FileKind::Spreadsheet => IngestedSource {
            table: read_workbook_bytes(input.bytes())?,
            decode: None,
        },
    };

    debug!(
        rows = source.table.len(),
        columns = source.table.headers.len(),
        "source read"
    );
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_dispatch_reports_encoding() {
        let input = RawInput::new("gl.csv", b"A\n1\n".to_vec()).unwrap();
        let source = read_source(&input, &DecoderConfig::default()).unwrap();
        let report = source.decode.unwrap();
        assert_eq!(report.encoding, "UTF-8");
        assert_eq!(report.confidence, DecodeConfidence::Clean);
        assert_eq!(source.table.len(), 1);
    }

    #[test]
    fn test_spreadsheet_dispatch_fails_on_csv_bytes() {
        let input = RawInput::with_kind("gl.xlsx", FileKind::Spreadsheet, b"A\n1\n".to_vec());
        assert!(read_source(&input, &DecoderConfig::default()).is_err());
    }
}
