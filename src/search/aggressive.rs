// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Aggressive fuzzy matching: leftmost greedy subsequence.
//!
//! One pass over the text. Every time the current query char shows up, take
//! it. Adjacent takes extend the current chunk, anything else starts a new
//! one. No backtracking, so the chunking is the leftmost one, not the best.

use crate::scoring::score_consecutive_chunks;
use crate::types::{HighlightRange, MatchResult};

/// Match `query` as a subsequence of `text` (both normalized, as chars).
///
/// Returns `None` if the text runs out before the query does, or if the
/// query is empty.
pub fn aggressive_fuzzy_match(text: &[char], query: &[char]) -> Option<MatchResult> {
    if query.is_empty() {
        return None;
    }

    let mut chunks = Vec::new();
    let mut current: Option<HighlightRange> = None;
    let mut query_idx = 0;

    for (idx, &c) in text.iter().enumerate() {
        if c != query[query_idx] {
            continue;
        }

        match current.as_mut() {
            Some(chunk) if chunk.end + 1 == idx => chunk.end = idx,
            _ => chunks.extend(current.replace(HighlightRange::new(idx, idx))),
        }

        query_idx += 1;
        if query_idx == query.len() {
            chunks.extend(current);
            return Some(score_consecutive_chunks(chunks, text));
        }
    }

    None
}
