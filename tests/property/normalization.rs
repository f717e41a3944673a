//! Properties of text normalization.

use proptest::prelude::*;
use sifter::{is_boundary, normalize};

proptest! {
    /// Normalizing twice changes nothing.
    #[test]
    fn prop_normalize_idempotent(text in "\\PC{0,40}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Normalized text has no surrounding whitespace and no uppercase ASCII.
    #[test]
    fn prop_normalize_trims_and_lowercases(text in "[ \\tA-Za-z0-9]{0,40}") {
        let normalized = normalize(&text);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.chars().any(|c| c.is_ascii_uppercase()));
    }

    /// Combining marks in U+0300–U+036F never survive.
    #[test]
    fn prop_combining_marks_are_stripped(base in "[a-z]{1,10}", mark in 0x0300u32..=0x036F) {
        let mark = char::from_u32(mark).unwrap();
        let text: String = base.chars().flat_map(|c| [c, mark]).collect();
        prop_assert_eq!(normalize(&text), base);
    }

    /// ASCII text keeps its length, so both index spaces line up.
    #[test]
    fn prop_ascii_length_preserved(text in "[a-zA-Z0-9\\-()\\[\\]]{0,40}") {
        prop_assert_eq!(normalize(&text).chars().count(), text.chars().count());
    }

    /// Boundary classification is unaffected by case.
    #[test]
    fn prop_letters_are_never_boundaries(c in "[a-zA-Z]") {
        let c = c.chars().next().unwrap();
        prop_assert!(!is_boundary(c));
    }
}
