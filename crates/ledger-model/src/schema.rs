//! Canonical output column schema.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{ModelError, Result};

/// Output columns of a general-ledger export, in write order.
pub const GENERAL_LEDGER_COLUMNS: [&str; 10] = [
    "PARTY_NUMBER",
    "PARTY_NAME",
    "PERIOD_NAME",
    "NATURAL_ACCOUNT_SEGMENT",
    "NATURAL_ACCOUNT_DESC",
    "GL_DATE",
    "TRANSACTION_NUMBER",
    "LINE_DESCRIPTION",
    "ACCOUNTED_DR",
    "ACCOUNTED_CR",
];

/// Period and date columns get one more trim right before they are written.
pub const GENERAL_LEDGER_TRIMMED_COLUMNS: [&str; 2] = ["PERIOD_NAME", "GL_DATE"];

/// Ordered, immutable list of required output columns.
///
/// Cloning is cheap; the column list is shared between clones and with every
/// [`NormalizedRecord`](crate::NormalizedRecord) built against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Arc<[String]>,
    trimmed_on_write: BTreeSet<String>,
}

impl ColumnSchema {
    /// Builds a schema from column names.
    ///
    /// Rejects an empty list and duplicate names.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(ModelError::EmptySchema);
        }
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }
        Ok(Self {
            columns: columns.into(),
            trimmed_on_write: BTreeSet::new(),
        })
    }

    /// Marks columns whose values are trimmed again immediately before writing.
    pub fn with_trimmed_columns<I, S>(mut self, columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for column in columns {
            let column = column.into();
            if !self.contains(&column) {
                return Err(ModelError::UnknownColumn { column });
            }
            self.trimmed_on_write.insert(column);
        }
        Ok(self)
    }

    /// The ten-column general-ledger schema.
    pub fn general_ledger() -> Self {
        let columns: Vec<String> = GENERAL_LEDGER_COLUMNS
            .iter()
            .map(|column| (*column).to_string())
            .collect();
        let trimmed_on_write = GENERAL_LEDGER_TRIMMED_COLUMNS
            .iter()
            .map(|column| (*column).to_string())
            .collect();
        Self {
            columns: columns.into(),
            trimmed_on_write,
        }
    }

    /// Column names in write order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub(crate) fn shared_columns(&self) -> Arc<[String]> {
        Arc::clone(&self.columns)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a constructed schema; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if `column` is part of the schema (exact match).
    pub fn contains(&self, column: &str) -> bool {
        self.position(column).is_some()
    }

    /// Index of `column` in write order.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Returns true if values of `column` are trimmed right before writing.
    pub fn is_trimmed_on_write(&self, column: &str) -> bool {
        self.trimmed_on_write.contains(column)
    }

    /// Iterates column names in write order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self::general_ledger()
    }
}

impl fmt::Display for ColumnSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.columns.join(","))
    }
}
