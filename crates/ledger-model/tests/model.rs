//! Tests for ledger-model types.

use ledger_model::{
    ColumnSchema, FileKind, GENERAL_LEDGER_COLUMNS, NormalizedRecord, RawInput, Record,
};

#[test]
fn general_ledger_schema_matches_constant() {
    let schema = ColumnSchema::general_ledger();
    let columns: Vec<&str> = schema.iter().collect();
    assert_eq!(columns, GENERAL_LEDGER_COLUMNS.to_vec());
    assert_eq!(ColumnSchema::default(), schema);
}

#[test]
fn normalized_record_shares_schema_columns() {
    let schema = ColumnSchema::general_ledger();
    let values = vec![String::new(); schema.len()];
    let record = NormalizedRecord::new(&schema, values).expect("record");

    assert_eq!(record.columns(), schema.columns());
    assert!(record.values().iter().all(String::is_empty));
}

#[test]
fn custom_schema_with_trimmed_columns() {
    let schema = ColumnSchema::new(["ID", "DATE"])
        .and_then(|schema| schema.with_trimmed_columns(["DATE"]))
        .expect("schema");

    assert!(schema.is_trimmed_on_write("DATE"));
    assert!(!schema.is_trimmed_on_write("ID"));
}

#[test]
fn raw_input_keeps_explicit_kind() {
    let input = RawInput::with_kind("upload", FileKind::Spreadsheet, vec![1, 2, 3]);
    assert_eq!(input.kind(), FileKind::Spreadsheet);
    assert_eq!(input.bytes(), &[1, 2, 3]);
}

#[test]
fn record_iteration_is_key_ordered() {
    let record: Record = [("B", "2"), ("A", "1")].into_iter().collect();
    let keys: Vec<&str> = record.columns().collect();
    assert_eq!(keys, vec!["A", "B"]);
}
