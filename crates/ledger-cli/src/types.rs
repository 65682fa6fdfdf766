use std::path::PathBuf;

use serde::Serialize;

use ledger_cli::pipeline::ConversionReport;

/// Outcome of one `convert` run, printed as a table or JSON.
#[derive(Debug, Serialize)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub report: ConversionReport,
    pub records: usize,
    pub output_file_name: String,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub bytes: usize,
}
