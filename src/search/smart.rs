// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Smart fuzzy matching: chunks that respect word structure.
//!
//! Walk the query left to right. For the next query char, find its next
//! occurrence in the text and accept it as a chunk start only if it sits on a
//! word edge, or if the next few chars of text and query agree (so "script"
//! can match inside "javascript", but a lone "s" in the middle of a word
//! can't). Once a start is accepted, extend the chunk greedily.
//!
//! The lookahead window shrinks near the end of the query or text, so the
//! final one or two query chars may land mid-word.

use crate::scoring::score_consecutive_chunks;
use crate::types::{HighlightRange, MatchResult};
use crate::util::boundary::starts_at_boundary;

use super::utils::find_char;

/// Chars of text and query that must agree to accept a mid-word chunk start.
pub const LOOKAHEAD_LEN: usize = 3;

/// Match `query` against `text` (both normalized, as chars).
///
/// Returns `None` if some query char has no acceptable occurrence left, or if
/// the query is empty.
pub fn smart_fuzzy_match(text: &[char], query: &[char]) -> Option<MatchResult> {
    if query.is_empty() {
        return None;
    }

    let mut chunks = Vec::new();
    let mut query_idx = 0;
    let mut search_from = 0;

    while query_idx < query.len() {
        let start = find_char(text, query[query_idx], search_from)?;

        if !accepts_chunk_start(text, query, start, query_idx) {
            // Skip this occurrence without consuming the query char.
            search_from = start + 1;
            continue;
        }

        let mut idx = start;
        while idx < text.len() && query_idx < query.len() && text[idx] == query[query_idx] {
            idx += 1;
            query_idx += 1;
        }
        let end = idx - 1;

        chunks.push(HighlightRange::new(start, end));
        search_from = end + 1;
    }

    Some(score_consecutive_chunks(chunks, text))
}

/// Word edge, or the next `min(3, query left, text left)` chars agree.
fn accepts_chunk_start(text: &[char], query: &[char], start: usize, query_idx: usize) -> bool {
    if starts_at_boundary(text, start) {
        return true;
    }
    let len = LOOKAHEAD_LEN
        .min(query.len() - query_idx)
        .min(text.len() - start);
    text[start..start + len] == query[query_idx..query_idx + len]
}
