//! Raw input buffers and file-kind dispatch.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Suffixes read as CSV text.
pub const CSV_EXTENSIONS: &[&str] = &["csv"];

/// Suffixes read as workbooks.
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsm", "xlsb", "ods"];

/// How a source buffer is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Delimited text; decoded before parsing.
    Csv,
    /// Binary workbook; only the first sheet is read.
    Spreadsheet,
}

impl FileKind {
    /// Chooses the kind from the file name suffix (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| ModelError::MissingExtension {
                file_name: file_name.to_string(),
            })?;

        if CSV_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Csv)
        } else if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Spreadsheet)
        } else {
            Err(ModelError::UnsupportedFileKind {
                file_name: file_name.to_string(),
                extension,
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Spreadsheet => "spreadsheet",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An in-memory source file: bytes, kind, and the name it was selected under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    file_name: String,
    kind: FileKind,
    bytes: Vec<u8>,
}

impl RawInput {
    /// Wraps `bytes`, detecting the kind from `file_name`.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let file_name = file_name.into();
        let kind = FileKind::from_file_name(&file_name)?;
        Ok(Self {
            file_name,
            kind,
            bytes,
        })
    }

    /// Wraps `bytes` with an explicit kind, bypassing suffix detection.
    pub fn with_kind(file_name: impl Into<String>, kind: FileKind, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            kind,
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
