//! Source records and schema-aligned normalized records.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{ModelError, Result};
use crate::schema::ColumnSchema;

/// One source row keyed by its header text.
///
/// Keys come from the source file verbatim; key order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    cells: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cell, replacing any earlier value under the same header.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A row carrying exactly the schema's columns, in schema order.
///
/// Every column has a value; absent source cells are stored as `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    columns: Arc<[String]>,
    values: Vec<String>,
}

impl NormalizedRecord {
    /// Pairs `values` with the schema's columns.
    ///
    /// Fails when the number of values differs from the schema width.
    pub fn new(schema: &ColumnSchema, values: Vec<String>) -> Result<Self> {
        if values.len() != schema.len() {
            return Err(ModelError::ArityMismatch {
                expected: schema.len(),
                actual: values.len(),
            });
        }
        Ok(Self {
            columns: schema.shared_columns(),
            values,
        })
    }

    /// Builds a record by computing one value per schema column, in order.
    pub fn from_fn<F>(schema: &ColumnSchema, mut value_for: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        Self {
            columns: schema.shared_columns(),
            values: schema.iter().map(&mut value_for).collect(),
        }
    }

    /// Value of `column`, or `None` if the column is not in the schema.
    pub fn get(&self, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.values.get(idx).map(String::as_str)
    }

    /// Column names in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in schema order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// `(column, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
