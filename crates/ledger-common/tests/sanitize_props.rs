//! Property tests for cell sanitizing.

use ledger_common::{is_stripped_char, sanitize, strip_control_chars};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sanitize_is_idempotent(value in any::<String>()) {
        let once = sanitize(&value);
        prop_assert_eq!(sanitize(&once), once.clone());
    }

    #[test]
    fn sanitize_output_is_clean(value in any::<String>()) {
        let out = sanitize(&value);
        prop_assert!(!out.chars().any(is_stripped_char));
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.contains(['\t', '\n', '\r']));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn strip_keeps_structure_chars(value in "[a-z\t\r\n,\"\u{0}-\u{1f}]{0,40}") {
        let stripped = strip_control_chars(&value);
        let expected: String = value
            .chars()
            .filter(|c| matches!(c, 'a'..='z' | '\t' | '\r' | '\n' | ',' | '"'))
            .collect();
        prop_assert_eq!(stripped.as_ref(), expected.as_str());
    }
}
