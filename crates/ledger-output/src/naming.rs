//! Output file naming.

use chrono::{Local, NaiveDate};

/// Prefix shared by every generated file name.
pub const OUTPUT_PREFIX: &str = "converted_";

/// File name for a conversion run on `date`: `converted_YYYYMMDD.csv`.
pub fn output_file_name(date: NaiveDate) -> String {
    format!("{OUTPUT_PREFIX}{}.csv", date.format("%Y%m%d"))
}

/// [`output_file_name`] for the local calendar date.
pub fn output_file_name_today() -> String {
    output_file_name(Local::now().date_naive())
}
