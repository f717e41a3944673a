// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word boundary characters.
//!
//! A match that starts right after one of these (or at index 0) is "at a word
//! edge" and scores better than one that starts mid-word.

/// Characters that count as word boundaries.
pub const BOUNDARY_CHARS: [char; 14] = [
    ' ', '[', ']', '(', ')', '-', '\u{2013}', '\u{2014}', '\'', '"', '\u{2018}', '\u{2019}',
    '\u{201C}', '\u{201D}',
];

/// Is `c` a word boundary character?
#[inline]
pub fn is_boundary(c: char) -> bool {
    matches!(
        c,
        ' ' | '['
            | ']'
            | '('
            | ')'
            | '-'
            | '\u{2013}' // en dash
            | '\u{2014}' // em dash
            | '\''
            | '"'
            | '\u{2018}'
            | '\u{2019}'
            | '\u{201C}'
            | '\u{201D}'
    )
}

/// Does a match starting at `index` begin at a word edge?
///
/// Index 0 always does. Otherwise the preceding char must be a boundary.
#[inline]
pub fn starts_at_boundary(chars: &[char], index: usize) -> bool {
    index == 0 || chars.get(index - 1).is_some_and(|&c| is_boundary(c))
}
