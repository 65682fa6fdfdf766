//! Strict CSV serialization of normalized records.
//!
//! Wire format:
//!
//! - UTF-8 byte-order mark first, so spreadsheet tools pick UTF-8.
//! - Every field, headers included, wrapped in double quotes.
//! - Internal `"` doubled; `\n`, `\r`, and `\t` each replaced by one space.
//! - `,` between fields and `\n` after every line, the last one included.

use std::borrow::Cow;

use tracing::debug;

use ledger_model::{ColumnSchema, NormalizedRecord};

/// UTF-8 byte-order mark written at the start of every file.
pub const UTF8_BOM: &str = "\u{FEFF}";

/// Renders `records` as BOM-prefixed CSV bytes.
///
/// Values are looked up by schema column, so a record built against a
/// different schema writes `""` for columns it lacks. Columns the schema marks
/// as trimmed-on-write are trimmed before escaping.
pub fn serialize(records: &[NormalizedRecord], schema: &ColumnSchema) -> Vec<u8> {
    let mut out = String::with_capacity(UTF8_BOM.len() + (records.len() + 1) * schema.len() * 16);
    out.push_str(UTF8_BOM);

    write_line(&mut out, schema.iter().map(Cow::Borrowed));
    for record in records {
        write_line(
            &mut out,
            schema.iter().map(|column| {
                let value = record.get(column).unwrap_or("");
                if schema.is_trimmed_on_write(column) {
                    Cow::Borrowed(value.trim())
                } else {
                    Cow::Borrowed(value)
                }
            }),
        );
    }

    debug!(
        rows = records.len(),
        columns = schema.len(),
        bytes = out.len(),
        "serialized CSV"
    );
    out.into_bytes()
}

fn write_line<'a>(out: &mut String, fields: impl Iterator<Item = Cow<'a, str>>) {
    for (idx, field) in fields.enumerate() {
        if idx > 0 {
            out.push(',');
        }
        out.push_str(&quote_field(&field));
    }
    out.push('\n');
}

/// Quotes one field: doubles `"`, flattens `\n`/`\r`/`\t` to spaces, wraps in `"`.
///
/// # Examples
///
/// ```
/// use ledger_output::quote_field;
///
/// assert_eq!(quote_field(r#"He said "hi""#), r#""He said ""hi""""#);
/// assert_eq!(quote_field("a\r\nb"), "\"a  b\"");
/// assert_eq!(quote_field(""), "\"\"");
/// ```
pub fn quote_field(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\"\""),
            '\n' | '\r' | '\t' => quoted.push(' '),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema_ab() -> ColumnSchema {
        ColumnSchema::new(["A", "B"])
            .unwrap()
            .with_trimmed_columns(["B"])
            .unwrap()
    }

    fn text(bytes: &[u8]) -> &str {
        std::str::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_header_only() {
        let bytes = serialize(&[], &schema_ab());
        assert_eq!(text(&bytes), "\u{FEFF}\"A\",\"B\"\n");
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn test_rows_end_with_newline() {
        let schema = schema_ab();
        let records = vec![
            NormalizedRecord::new(&schema, vec!["1".to_string(), "x".to_string()]).unwrap(),
            NormalizedRecord::new(&schema, vec!["2".to_string(), "y".to_string()]).unwrap(),
        ];
        let bytes = serialize(&records, &schema);
        assert_eq!(
            text(&bytes),
            "\u{FEFF}\"A\",\"B\"\n\"1\",\"x\"\n\"2\",\"y\"\n"
        );
    }

    #[test]
    fn test_trimmed_columns() {
        let schema = schema_ab();
        let records =
            vec![NormalizedRecord::new(&schema, vec![" 1 ".to_string(), " x ".to_string()]).unwrap()];
        let bytes = serialize(&records, &schema);
        assert!(text(&bytes).ends_with("\n\" 1 \",\"x\"\n"));
    }

    #[test]
    fn test_quote_field_escapes() {
        assert_eq!(quote_field("He said \"hi\""), "\"He said \"\"hi\"\"\"");
        assert_eq!(quote_field("a\tb\nc"), "\"a b c\"");
        assert_eq!(quote_field("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_foreign_schema_record_writes_empty() {
        let other = ColumnSchema::new(["Z"]).unwrap();
        let record = NormalizedRecord::new(&other, vec!["z".to_string()]).unwrap();
        let bytes = serialize(&[record], &schema_ab());
        assert!(text(&bytes).ends_with("\"\",\"\"\n"));
    }
}
