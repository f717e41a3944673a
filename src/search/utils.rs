// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Char-indexed search helpers shared by the matchers.
//!
//! Every matcher works in Unicode scalar indices, not bytes, so highlight
//! ranges can be applied to a string by walking its `chars()`.

use crate::types::{HighlightRange, HighlightRanges};

/// Index of the first occurrence of `needle` in `haystack` at or after `from`.
///
/// An empty needle matches at `from` (if `from` is in bounds).
pub fn find_chars(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

/// Index of the first `c` in `haystack` at or after `from`.
#[inline]
pub fn find_char(haystack: &[char], c: char, from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .iter()
        .position(|&h| h == c)
        .map(|pos| pos + from)
}

/// Inclusive range of `len` chars starting at `start`; `None` when `len` is 0.
#[inline]
pub fn span(start: usize, len: usize) -> Option<HighlightRange> {
    (len > 0).then(|| HighlightRange::new(start, start + len - 1))
}

/// [`span`] as a range list: one range, or none for a zero-length span.
#[inline]
pub fn span_ranges(start: usize, len: usize) -> HighlightRanges {
    span(start, len).into_iter().collect()
}
