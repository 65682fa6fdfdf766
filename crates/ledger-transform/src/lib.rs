//! Ledger record transformation.
//!
//! Maps source records of any shape onto a fixed [`ColumnSchema`]:
//! every output record carries exactly the schema's columns, in order, with
//! sanitized values and `""` for anything the source lacks.
//!
//! # Example
//!
//! ```
//! use ledger_model::{ColumnSchema, Record};
//! use ledger_transform::project;
//!
//! let record: Record = [("PARTY_NUMBER", " 001 ")].into_iter().collect();
//! let projected = project(&record, &ColumnSchema::general_ledger());
//!
//! assert_eq!(projected.get("PARTY_NUMBER"), Some("001"));
//! assert_eq!(projected.get("ACCOUNTED_CR"), Some(""));
//! ```
//!
//! [`ColumnSchema`]: ledger_model::ColumnSchema

mod projection;

pub use projection::{ProjectionStats, project, project_all, project_with_stats};
