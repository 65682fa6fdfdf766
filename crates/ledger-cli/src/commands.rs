use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use ledger_cli::pipeline::{ConversionOptions, Converter};
use ledger_ingest::{DecoderConfig, RejectReplacementChars};
use ledger_model::{ColumnSchema, RawInput};
use ledger_output::write_output;

use crate::cli::ConvertArgs;
use crate::summary::apply_table_style;
use crate::types::ConvertSummary;

pub fn run_columns() -> Result<()> {
    let schema = ColumnSchema::general_ledger();
    let mut table = Table::new();
    table.set_header(vec!["#", "Column", "Trimmed on write"]);
    apply_table_style(&mut table);
    for (idx, column) in schema.iter().enumerate() {
        let trimmed = if schema.is_trimmed_on_write(column) {
            "yes"
        } else {
            "-"
        };
        table.add_row(vec![(idx + 1).to_string(), column.to_string(), trimmed.to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertSummary> {
    let span = info_span!("convert_file", input = %args.input.display());
    let _guard = span.enter();

    let options = conversion_options(args)?;
    let input = read_input(&args.input)?;

    let mut converter = Converter::new(options);
    converter.select(input);
    converter
        .convert()
        .with_context(|| format!("convert {}", args.input.display()))?;
    let buffer = converter.serialize().context("serialize output")?;

    let output = if args.dry_run {
        info!("dry run: output not written");
        None
    } else {
        let path = output_path(args, &buffer.file_name);
        write_output(&path, &buffer.bytes)?;
        Some(path)
    };

    let report = converter
        .result()
        .map(|result| result.report.clone())
        .context("conversion result missing")?;
    Ok(ConvertSummary {
        input: args.input.clone(),
        report,
        records: converter.records().len(),
        output_file_name: buffer.file_name,
        output,
        bytes: buffer.bytes.len(),
    })
}

fn conversion_options(args: &ConvertArgs) -> Result<ConversionOptions> {
    let mut decoder = DecoderConfig::default();
    if !args.encodings.is_empty() {
        decoder = decoder
            .with_candidate_labels(&args.encodings)
            .context("parse --encoding")?;
    }
    if args.strict_decode {
        decoder = decoder.with_heuristic(RejectReplacementChars);
    }
    Ok(ConversionOptions::default().with_decoder(decoder))
}

fn read_input(path: &Path) -> Result<RawInput> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("input path has no file name: {}", path.display()))?;
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    RawInput::new(file_name, bytes).with_context(|| format!("open {}", path.display()))
}

fn output_path(args: &ConvertArgs, file_name: &str) -> PathBuf {
    if let Some(path) = &args.output {
        return path.clone();
    }
    let dir = args
        .output_dir
        .clone()
        .or_else(|| args.input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(file_name)
}
