// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numbers behind match ranking.
//!
//! Lower is better. The fixed tiers own the band below 2.0; the contains tier
//! sits exactly on 2.0; fuzzy matches start at 2.0 and pay a penalty per chunk.
//! Since every fuzzy match has at least one chunk, a fuzzy score is always
//! worse than a plain substring hit.
//!
//! # Fixed tier scores
//!
//! | Tier                         | Score          |
//! |------------------------------|----------------|
//! | exact                        | 0.0            |
//! | normalized exact             | 0.1            |
//! | prefix                       | 0.5            |
//! | exact-case word contains     | 0.9            |
//! | word contains                | 1.0            |
//! | multi-word (n words)         | 1.5 + 0.2·n    |
//! | contains                     | 2.0            |
//!
//! # Chunk penalties (fuzzy tiers)
//!
//! | Chunk shape                          | Penalty |
//! |--------------------------------------|---------|
//! | whole word (boundary on both sides)  | 0.2     |
//! | word start                           | 0.4     |
//! | mid-word, 3+ chars                   | 0.8     |
//! | mid-word, 1–2 chars                  | 1.6     |

use crate::types::{HighlightRange, MatchResult, MatchTier};
use crate::util::boundary::{is_boundary, starts_at_boundary};

// =============================================================================
// TIER SCORES
// =============================================================================

/// Item text equals the query exactly.
pub const EXACT_SCORE: f64 = 0.0;

/// Normalized item equals normalized query.
pub const NORMALIZED_EXACT_SCORE: f64 = 0.1;

/// Normalized item starts with normalized query.
pub const PREFIX_SCORE: f64 = 0.5;

/// Exact-case substring preceded by a word boundary.
pub const EXACT_CASE_WORD_SCORE: f64 = 0.9;

/// Normalized substring preceded by a word boundary.
pub const WORD_SCORE: f64 = 1.0;

/// Multi-word base; each query word adds [`MULTI_WORD_SCORE_PER_WORD`].
pub const MULTI_WORD_BASE_SCORE: f64 = 1.5;
pub const MULTI_WORD_SCORE_PER_WORD: f64 = 0.2;

/// Normalized substring anywhere.
pub const CONTAINS_SCORE: f64 = 2.0;

// =============================================================================
// CHUNK SCORING
// =============================================================================

/// Starting score for fuzzy matches, before chunk penalties.
pub const FUZZY_BASE_SCORE: f64 = 2.0;

pub const FULL_WORD_CHUNK_PENALTY: f64 = 0.2;
pub const WORD_START_CHUNK_PENALTY: f64 = 0.4;
pub const LONG_CHUNK_PENALTY: f64 = 0.8;
pub const SHORT_CHUNK_PENALTY: f64 = 1.6;

/// Mid-word chunks at least this long get [`LONG_CHUNK_PENALTY`].
pub const LONG_CHUNK_MIN_LEN: usize = 3;

/// Multi-word score for a query of `word_count` words.
#[inline]
pub fn multi_word_score(word_count: usize) -> f64 {
    MULTI_WORD_BASE_SCORE + word_count as f64 * MULTI_WORD_SCORE_PER_WORD
}

/// Penalty for one chunk of a fuzzy match.
///
/// `text` is the string the chunk indexes into (the normalized item).
pub fn chunk_penalty(chunk: HighlightRange, text: &[char]) -> f64 {
    let starts_word = starts_at_boundary(text, chunk.start);
    let ends_word = chunk.end + 1 >= text.len() || is_boundary(text[chunk.end + 1]);

    if starts_word && ends_word {
        FULL_WORD_CHUNK_PENALTY
    } else if starts_word {
        WORD_START_CHUNK_PENALTY
    } else if chunk.len() >= LONG_CHUNK_MIN_LEN {
        LONG_CHUNK_PENALTY
    } else {
        SHORT_CHUNK_PENALTY
    }
}

/// Turn fuzzy chunks into a scored match.
///
/// Chunks must already be in ascending order; they are returned unchanged as
/// the highlight ranges. Penalties are summed left to right onto the base.
pub fn score_consecutive_chunks(chunks: Vec<HighlightRange>, text: &[char]) -> MatchResult {
    let mut score = FUZZY_BASE_SCORE;
    for &chunk in &chunks {
        score += chunk_penalty(chunk, text);
    }
    MatchResult::new(MatchTier::Fuzzy, score, chunks)
}
