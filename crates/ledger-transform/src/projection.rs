//! Projection of arbitrary-schema records onto a [`ColumnSchema`].
//!
//! Lookup is by exact header text: no aliases, no case folding, no fuzzy
//! matching. A source column missing from a row yields `""`.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use ledger_common::sanitize;
use ledger_model::{ColumnSchema, NormalizedRecord, Record};

/// Column coverage of one projection run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectionStats {
    /// Records produced (always equal to records consumed).
    pub rows: usize,
    /// Schema columns found in at least one source record.
    pub matched_columns: Vec<String>,
    /// Schema columns absent from every source record.
    pub missing_columns: Vec<String>,
    /// Source columns the schema does not use.
    pub ignored_columns: Vec<String>,
}

/// Projects one record onto `schema`.
pub fn project(record: &Record, schema: &ColumnSchema) -> NormalizedRecord {
    NormalizedRecord::from_fn(schema, |column| {
        record.get(column).map(sanitize).unwrap_or_default()
    })
}

/// Projects every record, preserving order and count.
pub fn project_all(records: &[Record], schema: &ColumnSchema) -> Vec<NormalizedRecord> {
    records.iter().map(|record| project(record, schema)).collect()
}

/// Projects every record and reports which columns matched.
pub fn project_with_stats(
    records: &[Record],
    schema: &ColumnSchema,
) -> (Vec<NormalizedRecord>, ProjectionStats) {
    let projected = project_all(records, schema);

    let source_columns: BTreeSet<&str> = records.iter().flat_map(Record::columns).collect();
    let (matched_columns, missing_columns): (Vec<String>, Vec<String>) = schema
        .iter()
        .map(str::to_string)
        .partition(|column| source_columns.contains(column.as_str()));
    let ignored_columns: Vec<String> = source_columns
        .iter()
        .filter(|column| !schema.contains(column))
        .map(|column| (*column).to_string())
        .collect();

    let stats = ProjectionStats {
        rows: projected.len(),
        matched_columns,
        missing_columns,
        ignored_columns,
    };
    debug!(
        rows = stats.rows,
        matched = stats.matched_columns.len(),
        missing = stats.missing_columns.len(),
        ignored = stats.ignored_columns.len(),
        "projected records onto schema"
    );
    (projected, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_missing_columns_are_empty() {
        let schema = ColumnSchema::general_ledger();
        let projected = project(
            &record(&[("PARTY_NUMBER", "001"), ("PARTY_NAME", "Acme")]),
            &schema,
        );

        assert_eq!(projected.len(), 10);
        assert_eq!(projected.get("PARTY_NUMBER"), Some("001"));
        assert_eq!(projected.get("PARTY_NAME"), Some("Acme"));
        let empty = projected.values().iter().filter(|v| v.is_empty()).count();
        assert_eq!(empty, 8);
    }

    #[test]
    fn test_values_are_sanitized() {
        let schema = ColumnSchema::general_ledger();
        let projected = project(
            &record(&[("LINE_DESCRIPTION", "A\u{1}   B"), ("GL_DATE", " 2024-01-15 ")]),
            &schema,
        );
        assert_eq!(projected.get("LINE_DESCRIPTION"), Some("A B"));
        assert_eq!(projected.get("GL_DATE"), Some("2024-01-15"));
    }

    #[test]
    fn test_exact_key_match_only() {
        let schema = ColumnSchema::general_ledger();
        let projected = project(
            &record(&[("party_number", "001"), ("PARTY_NAME ", "Acme")]),
            &schema,
        );
        assert!(projected.values().iter().all(String::is_empty));
    }

    #[test]
    fn test_output_follows_schema_order() {
        let schema = ColumnSchema::new(["B", "A"]).unwrap();
        let projected = project(&record(&[("A", "1"), ("B", "2")]), &schema);
        assert_eq!(projected.values(), &["2".to_string(), "1".to_string()]);
    }

    #[test]
    fn test_project_with_stats() {
        let schema = ColumnSchema::new(["A", "B", "C"]).unwrap();
        let records = vec![record(&[("A", "1"), ("X", "?")]), record(&[("B", "2")])];
        let (projected, stats) = project_with_stats(&records, &schema);

        assert_eq!(projected.len(), 2);
        assert_eq!(stats.rows, 2);
        assert_eq!(stats.matched_columns, vec!["A", "B"]);
        assert_eq!(stats.missing_columns, vec!["C"]);
        assert_eq!(stats.ignored_columns, vec!["X"]);
    }

    #[test]
    fn test_empty_input() {
        let (projected, stats) = project_with_stats(&[], &ColumnSchema::general_ledger());
        assert!(projected.is_empty());
        assert_eq!(stats.rows, 0);
        assert_eq!(stats.missing_columns.len(), 10);
    }
}
