//! Cell text cleanup.
//!
//! Export files from accounting systems regularly carry decode artifacts
//! (U+FFFD), stray NUL bytes, and control codes pasted in from terminals.
//! [`sanitize`] removes them and normalizes whitespace; [`strip_control_chars`]
//! only removes them and leaves row/column structure (TAB, LF, CR) intact.

use std::borrow::Cow;

/// Unicode replacement character emitted by lossy decoders.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Returns true for characters that are always removed from cell text.
///
/// Covers U+FFFD, NUL, the C0 controls other than TAB/LF/CR, and DEL.
pub fn is_stripped_char(c: char) -> bool {
    matches!(
        c,
        REPLACEMENT_CHARACTER
            | '\u{0000}'..='\u{0008}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000E}'..='\u{001F}'
            | '\u{007F}'
    )
}

/// Whitespace that collapses to a single space.
///
/// A zero-width no-break space (a BOM that ended up mid-text) counts as
/// whitespace here.
fn is_collapsible_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Removes replacement, NUL, control, and DEL characters.
///
/// TAB, LF, and CR are kept. Returns the input unchanged (borrowed) when there
/// is nothing to remove.
///
/// # Examples
///
/// ```
/// use ledger_common::strip_control_chars;
///
/// assert_eq!(strip_control_chars("a\u{0}b\u{7f}"), "ab");
/// assert_eq!(strip_control_chars("a\tb\r\n"), "a\tb\r\n");
/// ```
pub fn strip_control_chars(value: &str) -> Cow<'_, str> {
    if value.chars().any(is_stripped_char) {
        Cow::Owned(value.chars().filter(|c| !is_stripped_char(*c)).collect())
    } else {
        Cow::Borrowed(value)
    }
}

/// Cleans one cell value.
///
/// Removes the characters [`strip_control_chars`] removes, collapses every
/// whitespace run to one space, and trims both ends. Idempotent.
///
/// # Examples
///
/// ```
/// use ledger_common::sanitize;
///
/// assert_eq!(sanitize("A\u{1}   B"), "A B");
/// assert_eq!(sanitize("  2024-01 \t"), "2024-01");
/// assert_eq!(sanitize("\u{FFFD}"), "");
/// ```
pub fn sanitize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_space = false;

    for c in value.chars() {
        if is_stripped_char(c) {
            continue;
        }
        if is_collapsible_whitespace(c) {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }

    out
}
