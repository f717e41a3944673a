// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed-score tiers: exact, prefix and word-anchored contains.
//!
//! Checked strictly in order, first hit wins:
//!
//! | # | Check                                          | Score | Ranges index |
//! |---|------------------------------------------------|-------|--------------|
//! | 1 | `text == query`                                | 0.0   | original     |
//! | 2 | `normalize(text) == normalize(query)`          | 0.1   | normalized   |
//! | 3 | normalized text starts with normalized query   | 0.5   | normalized   |
//! | 4 | exact-case substring after a word boundary     | 0.9   | original     |
//! | 5 | normalized substring after a word boundary     | 1.0   | normalized   |
//!
//! Tiers 4 and 5 only look at the *first* occurrence. If that one is mid-word
//! the tier fails, even when a later occurrence would sit on a boundary.
//!
//! Tier 5 sizes its range with the char length of the *original* query. When
//! normalization changes the query's length (a decomposed accent, say) the
//! range end is off by that difference.

use crate::scoring::{
    CONTAINS_SCORE, EXACT_CASE_WORD_SCORE, EXACT_SCORE, NORMALIZED_EXACT_SCORE, PREFIX_SCORE,
    WORD_SCORE,
};
use crate::types::{MatchResult, MatchTier};
use crate::util::boundary::starts_at_boundary;

use super::matcher::{PreparedQuery, PreparedText};
use super::utils::{find_chars, span_ranges};

/// Tiers 1–5. `None` means fall through to the multi-word tier.
pub fn match_exact_tiers(text: &PreparedText, query: &PreparedQuery) -> Option<MatchResult> {
    if text.original == query.original {
        return Some(MatchResult::new(
            MatchTier::Exact,
            EXACT_SCORE,
            span_ranges(0, text.original_chars.len()),
        ));
    }

    if text.normalized == query.normalized {
        return Some(MatchResult::new(
            MatchTier::NormalizedExact,
            NORMALIZED_EXACT_SCORE,
            span_ranges(0, text.normalized_chars.len()),
        ));
    }

    if text.normalized.starts_with(&query.normalized) {
        return Some(MatchResult::new(
            MatchTier::Prefix,
            PREFIX_SCORE,
            span_ranges(0, query.normalized_chars.len()),
        ));
    }

    if let Some(idx) = find_chars(&text.original_chars, &query.original_chars, 0) {
        if starts_at_boundary(&text.original_chars, idx) {
            return Some(MatchResult::new(
                MatchTier::ExactCaseWord,
                EXACT_CASE_WORD_SCORE,
                span_ranges(idx, query.original_chars.len()),
            ));
        }
    }

    if let Some(idx) = find_chars(&text.normalized_chars, &query.normalized_chars, 0) {
        if starts_at_boundary(&text.normalized_chars, idx) {
            return Some(MatchResult::new(
                MatchTier::Word,
                WORD_SCORE,
                span_ranges(idx, query.original_chars.len()),
            ));
        }
    }

    None
}

/// Plain normalized substring, no boundary requirement (score 2.0).
///
/// Runs after the multi-word tier. Like tier 5, the range is sized by the
/// original query's length.
pub fn match_contains(text: &PreparedText, query: &PreparedQuery) -> Option<MatchResult> {
    let idx = find_chars(&text.normalized_chars, &query.normalized_chars, 0)?;
    Some(MatchResult::new(
        MatchTier::Contains,
        CONTAINS_SCORE,
        span_ranges(idx, query.original_chars.len()),
    ))
}
