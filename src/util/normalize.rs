// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for case- and accent-insensitive matching.
//!
//! Every tier past the first compares normalized forms, so this runs once per
//! field at build time and once per query. It must be idempotent: the builder
//! normalizes item text, callers sometimes hand back already-normalized
//! queries, and both have to land in the same place.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip diacritics, fold a few
/// letters NFD leaves alone, and trim.
///
/// - "Café" → "cafe"
/// - "Łódź" → "lodz"
/// - "  Niño  " → "nino"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. Lowercase
/// 2. NFD normalize (decompose characters into base + combining marks)
/// 3. Drop combining diacritical marks (U+0300–U+036F)
/// 4. Fold `ł` → `l` and `ñ` → `n`
/// 5. Trim leading/trailing whitespace
///
/// Internal whitespace is left as-is. Multi-word matching splits on single
/// spaces, so two spaces in a row are significant.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(fold_letter)
        .collect();
    folded.trim().to_string()
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Precomposed accented letters are kept; assumes input is ASCII or already
/// decomposed.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .map(fold_letter)
        .collect();
    folded.trim().to_string()
}

/// Combining Diacritical Marks block.
#[inline]
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

#[inline]
fn fold_letter(c: char) -> char {
    match c {
        'ł' => 'l',
        'ñ' => 'n',
        other => other,
    }
}
