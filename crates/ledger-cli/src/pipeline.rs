//! Conversion pipeline with explicit stages.
//!
//! The pipeline runs these stages in order over one in-memory input:
//! 1. **Read**: decode text (CSV) or open the workbook, parse rows
//! 2. **Project**: sanitize values and align every row to the schema
//! 3. **Serialize**: render the strict CSV buffer on request
//!
//! [`Converter`] owns the current selection and the single result slot.

use std::time::Instant;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, info_span, trace, warn};

use ledger_ingest::{DecodeReport, DecoderConfig, IngestError, read_source};
use ledger_model::{ColumnSchema, FileKind, NormalizedRecord, RawInput};
use ledger_output::{output_file_name, output_file_name_today, serialize};
use ledger_transform::{ProjectionStats, project_with_stats};

use crate::logging::redact_value;

/// Settings shared by every conversion.
#[derive(Debug, Clone, Default)]
pub struct ConversionOptions {
    /// Target columns, in output order.
    pub schema: ColumnSchema,
    /// Candidate encodings for CSV text.
    pub decoder: DecoderConfig,
}

impl ConversionOptions {
    #[must_use]
    pub fn with_schema(mut self, schema: ColumnSchema) -> Self {
        self.schema = schema;
        self
    }

    #[must_use]
    pub fn with_decoder(mut self, decoder: DecoderConfig) -> Self {
        self.decoder = decoder;
        self
    }
}

/// The single failure outcome of the pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no input file selected")]
    NoInput,

    #[error("nothing to serialize: no successful conversion")]
    NotConverted,

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Where a [`Converter`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConverterState {
    /// Nothing selected.
    Idle,
    /// Input selected, no result yet.
    Selected,
    /// A conversion is running.
    Converting,
    /// The result slot holds the latest records.
    Converted,
    /// The last conversion failed; the selection is kept, the result is gone.
    Failed,
}

/// What a conversion read and produced.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub file_name: String,
    pub kind: FileKind,
    /// Encoding outcome; `None` for workbooks.
    pub decode: Option<DecodeReport>,
    /// Source header cells, in file order.
    pub source_headers: Vec<String>,
    pub skipped_blank_rows: usize,
    pub projection: ProjectionStats,
    pub duration_ms: u128,
}

/// Records produced by one successful conversion.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub records: Vec<NormalizedRecord>,
    pub report: ConversionReport,
}

/// Serialized output ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

/// Runs read and projection for one input.
///
/// # Errors
///
/// Returns [`ConvertError::Ingest`] when the CSV cannot be parsed or the
/// workbook cannot be opened.
pub fn convert_input(
    input: &RawInput,
    options: &ConversionOptions,
) -> Result<ConversionResult, ConvertError> {
    let span = info_span!(
        "convert",
        file = input.file_name(),
        kind = %input.kind(),
        bytes = input.len()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let read_start = Instant::now();
    let source = read_source(input, &options.decoder)?;
    info!(
        rows = source.table.len(),
        columns = source.table.headers.len(),
        duration_ms = read_start.elapsed().as_millis(),
        "read complete"
    );
    if let Some(decode) = &source.decode {
        debug!(encoding = %decode.encoding, confidence = %decode.confidence, "decoded text");
    }
    if let Some(first) = source.table.records.first() {
        for (column, value) in first.iter() {
            trace!(column, value = redact_value(value), "first source row");
        }
    }

    let project_start = Instant::now();
    let (records, projection) = project_with_stats(&source.table.records, &options.schema);
    if !projection.ignored_columns.is_empty() {
        debug!(ignored = ?projection.ignored_columns, "source columns not in schema");
    }
    if projection.matched_columns.is_empty() && !records.is_empty() {
        warn!("no source column matches the schema; every value will be empty");
    }
    info!(
        rows = records.len(),
        matched = projection.matched_columns.len(),
        duration_ms = project_start.elapsed().as_millis(),
        "projection complete"
    );

    let report = ConversionReport {
        file_name: input.file_name().to_string(),
        kind: input.kind(),
        decode: source.decode,
        source_headers: source.table.headers,
        skipped_blank_rows: source.table.skipped_blank_rows,
        projection,
        duration_ms: start.elapsed().as_millis(),
    };
    Ok(ConversionResult { records, report })
}

/// A conversion session: one selection and at most one result.
///
/// Conversion takes `&mut self`, so a second conversion cannot start while
/// one is running.
#[derive(Debug)]
pub struct Converter {
    options: ConversionOptions,
    state: ConverterState,
    input: Option<RawInput>,
    result: Option<ConversionResult>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConversionOptions::default())
    }
}

impl Converter {
    pub fn new(options: ConversionOptions) -> Self {
        Self {
            options,
            state: ConverterState::Idle,
            input: None,
            result: None,
        }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    pub fn state(&self) -> ConverterState {
        self.state
    }

    /// The current selection, if any.
    pub fn input(&self) -> Option<&RawInput> {
        self.input.as_ref()
    }

    /// Stores `input` as the selection and drops any previous result.
    pub fn select(&mut self, input: RawInput) {
        debug!(file = input.file_name(), kind = %input.kind(), "input selected");
        self.input = Some(input);
        self.result = None;
        self.state = ConverterState::Selected;
    }

    /// Converts the current selection, replacing the result slot.
    ///
    /// # Errors
    ///
    /// [`ConvertError::NoInput`] without a selection; otherwise any read
    /// failure, after which the state is [`ConverterState::Failed`] and no
    /// result is held.
    pub fn convert(&mut self) -> Result<&ConversionResult, ConvertError> {
        let Some(input) = self.input.as_ref() else {
            return Err(ConvertError::NoInput);
        };
        self.state = ConverterState::Converting;
        match convert_input(input, &self.options) {
            Ok(result) => {
                self.state = ConverterState::Converted;
                Ok(self.result.insert(result))
            }
            Err(error) => {
                warn!(file = input.file_name(), %error, "conversion failed");
                self.result = None;
                self.state = ConverterState::Failed;
                Err(error)
            }
        }
    }

    /// The latest successful result.
    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    /// Records of the latest successful conversion; empty otherwise.
    pub fn records(&self) -> &[NormalizedRecord] {
        self.result
            .as_ref()
            .map(|result| result.records.as_slice())
            .unwrap_or_default()
    }

    /// Serializes the current result, named for today's local date.
    ///
    /// # Errors
    ///
    /// [`ConvertError::NotConverted`] unless the last conversion succeeded.
    pub fn serialize(&self) -> Result<OutputBuffer, ConvertError> {
        self.serialize_with_name(output_file_name_today())
    }

    /// Serializes the current result, named for `date`.
    ///
    /// # Errors
    ///
    /// [`ConvertError::NotConverted`] unless the last conversion succeeded.
    pub fn serialize_for_date(&self, date: NaiveDate) -> Result<OutputBuffer, ConvertError> {
        self.serialize_with_name(output_file_name(date))
    }

    fn serialize_with_name(&self, file_name: String) -> Result<OutputBuffer, ConvertError> {
        let result = match (self.state, self.result.as_ref()) {
            (ConverterState::Converted, Some(result)) => result,
            _ => return Err(ConvertError::NotConverted),
        };
        let bytes = serialize(&result.records, &self.options.schema);
        info!(file_name = %file_name, bytes = bytes.len(), "output serialized");
        Ok(OutputBuffer { bytes, file_name })
    }

    /// Drops the selection and any result.
    pub fn reset(&mut self) {
        self.input = None;
        self.result = None;
        self.state = ConverterState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn csv_input(text: &str) -> RawInput {
        RawInput::new("gl.csv", text.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_new_converter_is_idle() {
        let converter = Converter::default();
        assert_eq!(converter.state(), ConverterState::Idle);
        assert!(converter.records().is_empty());
        assert!(converter.input().is_none());
    }

    #[test]
    fn test_convert_without_input() {
        let mut converter = Converter::default();
        assert!(matches!(converter.convert(), Err(ConvertError::NoInput)));
        assert_eq!(converter.state(), ConverterState::Idle);
    }

    #[test]
    fn test_select_clears_previous_result() {
        let mut converter = Converter::default();
        converter.select(csv_input("PARTY_NUMBER\n001\n"));
        converter.convert().unwrap();
        assert_eq!(converter.records().len(), 1);

        converter.select(csv_input("PARTY_NUMBER\n002\n003\n"));
        assert_eq!(converter.state(), ConverterState::Selected);
        assert!(converter.records().is_empty());
        assert!(matches!(
            converter.serialize(),
            Err(ConvertError::NotConverted)
        ));
    }

    #[test]
    fn test_convert_input_report() {
        let input = csv_input("PARTY_NUMBER,EXTRA\n001,x\n,\n");
        let result = convert_input(&input, &ConversionOptions::default()).unwrap();

        assert_eq!(result.records.len(), 2);
        assert_eq!(result.report.kind, FileKind::Csv);
        assert_eq!(result.report.source_headers, vec!["PARTY_NUMBER", "EXTRA"]);
        assert_eq!(result.report.projection.matched_columns, vec!["PARTY_NUMBER"]);
        assert_eq!(result.report.projection.ignored_columns, vec!["EXTRA"]);
        assert_eq!(
            result.report.decode.as_ref().map(|d| d.encoding.as_str()),
            Some("UTF-8")
        );
    }

    #[test]
    fn test_unmatched_columns_warn_once() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            convert_input(&csv_input("OTHER\nx\n"), &ConversionOptions::default())
        })
        .unwrap();

        assert_eq!(result.records.len(), 1);
        assert!(result.report.projection.matched_columns.is_empty());
        let text = logs.text();
        assert_eq!(text.matches("no source column matches the schema").count(), 1);
        assert!(text.contains("WARN"));
    }
}
