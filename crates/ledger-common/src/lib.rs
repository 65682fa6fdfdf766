//! Shared text utilities for ledger-convert crates.

mod numeric;
mod sanitize;

pub use numeric::format_numeric;
pub use sanitize::{REPLACEMENT_CHARACTER, is_stripped_char, sanitize, strip_control_chars};
