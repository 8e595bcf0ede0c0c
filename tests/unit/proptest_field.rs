//! Property-based tests for the field encoder
//!
//! Uses proptest to verify properties that should hold for all inputs.

use inspection_log::storage::encode;
use proptest::prelude::*;

fn is_special(c: char) -> bool {
    matches!(c, ',' | '"' | '\n' | '\r')
}

/// Undo the quoting: strip the outer quotes and collapse doubled quotes
fn decode(field: &str) -> String {
    field[1..field.len() - 1].replace("\"\"", "\"")
}

proptest! {
    /// Text without special characters passes through untouched
    #[test]
    fn plain_text_is_unchanged(value in "[^,\"\r\n]*") {
        prop_assert_eq!(encode(&value), value.as_str());
    }

    /// Text with a special character is wrapped in quotes
    #[test]
    fn special_text_is_wrapped(prefix in ".*", special in "[,\"\r\n]", suffix in ".*") {
        let value = format!("{prefix}{special}{suffix}");
        let encoded = encode(&value);
        prop_assert!(encoded.len() >= 2);
        prop_assert!(encoded.starts_with('"'));
        prop_assert!(encoded.ends_with('"'));
    }

    /// Every quote in the input appears doubled in the output
    #[test]
    fn quotes_are_doubled(value in ".*\".*") {
        let encoded = encode(&value);
        let inner_quotes = encoded.matches('"').count() - 2;
        prop_assert_eq!(inner_quotes, value.matches('"').count() * 2);
        prop_assert_eq!(decode(&encoded), value.as_str());
    }

    /// Quoted output always round-trips back to the input
    #[test]
    fn quoting_is_reversible(value in any::<String>()) {
        let encoded = encode(&value);
        if value.chars().any(is_special) {
            prop_assert_eq!(decode(&encoded), value.as_str());
        } else {
            prop_assert_eq!(encoded, value.as_str());
        }
    }

    /// Encoding a quoted field again quotes it again
    #[test]
    fn double_encoding_is_distinguishable(value in ".*[,\"].*") {
        let once = encode(&value).into_owned();
        let twice = encode(&once).into_owned();
        prop_assert_ne!(once, twice);
    }
}
