//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sifter::{HighlightRange, SearchResult};

// Re-export canonical test utilities from sifter::testing
pub use sifter::testing::{command_fields, make_command, palette, palette_search, Command, FRUITS};

/// Float tolerance for summed chunk penalties.
pub const EPSILON: f64 = 1e-9;

/// Build ranges from `(start, end)` pairs.
pub fn ranges(pairs: &[(usize, usize)]) -> Vec<HighlightRange> {
    pairs.iter().map(|&pair| pair.into()).collect()
}

/// Ranges back to pairs, for readable assertions.
pub fn pairs(ranges: &[HighlightRange]) -> Vec<(usize, usize)> {
    ranges.iter().map(|&range| range.into()).collect()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Items of string search results, in rank order.
pub fn items<'a>(results: &[SearchResult<'a, &'a str>]) -> Vec<&'a str> {
    results.iter().map(|result| *result.item).collect()
}

/// Chars of `text`, for calling the fuzzy matchers directly.
pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}
