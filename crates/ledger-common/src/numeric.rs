//! Display text for numbers read from workbooks.

/// Significant digits a spreadsheet shows for a number in General format.
const DISPLAY_PRECISION: i32 = 15;

/// Formats a floating-point cell the way a spreadsheet displays it.
///
/// The value is rounded to 15 significant digits, which drops the binary
/// noise of computed cells (`0.1 + 0.2` prints as `0.3`). Trailing zeros and
/// a bare decimal point are removed, negative zero prints as `0`, and the
/// result is always positional.
///
/// # Examples
///
/// ```
/// use ledger_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(-0.0), "0");
/// assert_eq!(format_numeric(1234567.89), "1234567.89");
/// assert_eq!(format_numeric(1250.1 * 3.0), "3750.3");
/// ```
pub fn format_numeric(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (DISPLAY_PRECISION - 1 - magnitude).max(0) as usize;
    let text = format!("{value:.decimals$}");
    let trimmed = trim_fraction(&text);
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
