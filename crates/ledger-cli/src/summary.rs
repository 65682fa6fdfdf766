use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ledger_ingest::DecodeConfidence;

use crate::types::ConvertSummary;

pub fn print_summary(summary: &ConvertSummary) {
    let report = &summary.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_summary_table_style(&mut table);

    table.add_row(vec![label_cell("Input"), Cell::new(summary.input.display())]);
    table.add_row(vec![label_cell("Kind"), Cell::new(report.kind)]);
    match &report.decode {
        Some(decode) => {
            table.add_row(vec![label_cell("Encoding"), Cell::new(&decode.encoding)]);
            table.add_row(vec![
                label_cell("Confidence"),
                confidence_cell(decode.confidence),
            ]);
        }
        None => {
            table.add_row(vec![label_cell("Encoding"), dim_cell("workbook")]);
        }
    }
    table.add_row(vec![label_cell("Rows"), Cell::new(summary.records)]);
    if report.skipped_blank_rows > 0 {
        table.add_row(vec![
            label_cell("Blank rows skipped"),
            Cell::new(report.skipped_blank_rows),
        ]);
    }
    table.add_row(vec![
        label_cell("Matched columns"),
        column_list_cell(&report.projection.matched_columns, Color::Green),
    ]);
    table.add_row(vec![
        label_cell("Missing columns"),
        column_list_cell(&report.projection.missing_columns, Color::Yellow),
    ]);
    table.add_row(vec![
        label_cell("Ignored columns"),
        column_list_cell(&report.projection.ignored_columns, Color::DarkGrey),
    ]);
    let output = match &summary.output {
        Some(path) => Cell::new(path.display())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell(format!("{} (dry run)", summary.output_file_name)),
    };
    table.add_row(vec![label_cell("Output"), output]);
    table.add_row(vec![label_cell("Bytes"), Cell::new(summary.bytes)]);
    println!("{table}");
}

pub fn print_summary_json(summary: &ConvertSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("encode summary")?;
    println!("{json}");
    Ok(())
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn confidence_cell(confidence: DecodeConfidence) -> Cell {
    match confidence {
        DecodeConfidence::Bom | DecodeConfidence::Clean => Cell::new(confidence).fg(Color::Green),
        DecodeConfidence::BestEffort => Cell::new(confidence)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
    }
}

fn column_list_cell(columns: &[String], color: Color) -> Cell {
    if columns.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(columns.join(", ")).fg(color)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Blue)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
