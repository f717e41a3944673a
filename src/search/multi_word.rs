// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-word matching: every query word is a whole word of the text.
//!
//! "world hello" matches "Hello World" even though neither order nor
//! adjacency lines up. Word order in the text is free, so the ranges are
//! sorted before they go out.

use crate::scoring::multi_word_score;
use crate::types::{HighlightRange, MatchResult, MatchTier};

use super::matcher::{PreparedQuery, PreparedText};
use super::utils::{find_chars, span};

/// Score `1.5 + 0.2·n` for an `n`-word query (`n >= 2`) whose words are all
/// words of the text.
///
/// Each word is highlighted at its first occurrence in the normalized text,
/// which may fall inside a longer word. A repeated query word gets its own
/// range each time, so ranges may repeat or overlap.
pub fn match_multi_word(text: &PreparedText, query: &PreparedQuery) -> Option<MatchResult> {
    let words = query.words();
    if words.len() < 2 || !words.iter().all(|word| text.words.contains(word)) {
        return None;
    }

    let mut ranges: Vec<HighlightRange> = words
        .iter()
        .filter_map(|word| {
            let word: Vec<char> = word.chars().collect();
            let idx = find_chars(&text.normalized_chars, &word, 0)?;
            span(idx, word.len())
        })
        .collect();
    ranges.sort_by_key(|range| range.start);

    Some(MatchResult::new(
        MatchTier::MultiWord,
        multi_word_score(words.len()),
        ranges,
    ))
}
