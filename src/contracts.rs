// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts on matcher output.
//!
//! Two layers, same properties:
//!
//! 1. `verify_*` functions return `Result<(), InvariantError>`, for tests and
//!    fuzz targets.
//! 2. `check_*` functions panic on violation in debug builds and compile to
//!    nothing in release. The orchestrator and the collection search call them
//!    on every result they hand out.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract                   | Property                                          |
//! |----------------------------|---------------------------------------------------|
//! | `verify_ranges_ordered`    | `start <= end`, starts non-decreasing             |
//! | `verify_ranges_disjoint`   | ordered, and each range starts after the previous |
//! | `verify_match_result`      | disjoint ranges (ordered only for multi-word)     |
//! | `verify_search_results`    | scores non-decreasing, every item has a match     |
//!
//! Multi-word results are only required to be ordered: each word is
//! highlighted at its first occurrence, and a short word can first occur
//! inside a longer one.

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The tier ladder: every fixed tier beats contains, contains beats any fuzzy match.
const _: () = {
    use crate::scoring::*;

    assert!(EXACT_SCORE < NORMALIZED_EXACT_SCORE);
    assert!(NORMALIZED_EXACT_SCORE < PREFIX_SCORE);
    assert!(PREFIX_SCORE < EXACT_CASE_WORD_SCORE);
    assert!(EXACT_CASE_WORD_SCORE < WORD_SCORE);

    // Smallest multi-word query has two words
    assert!(WORD_SCORE < MULTI_WORD_BASE_SCORE + 2.0 * MULTI_WORD_SCORE_PER_WORD);
    assert!(MULTI_WORD_BASE_SCORE + 2.0 * MULTI_WORD_SCORE_PER_WORD < CONTAINS_SCORE);

    // Every fuzzy match has at least one chunk
    assert!(CONTAINS_SCORE < FUZZY_BASE_SCORE + FULL_WORD_CHUNK_PENALTY);
};

use crate::error::InvariantError;
use crate::types::{HighlightRange, MatchResult, MatchTier, SearchResult};

// ============================================================================
// RANGE CONTRACTS
// ============================================================================

/// Ranges are well-formed and sorted by start.
pub fn verify_ranges_ordered(ranges: &[HighlightRange]) -> Result<(), InvariantError> {
    for (position, range) in ranges.iter().enumerate() {
        if range.start > range.end {
            return Err(InvariantError::InvertedRange {
                position,
                start: range.start,
                end: range.end,
            });
        }
        if position > 0 && range.start < ranges[position - 1].start {
            return Err(InvariantError::UnsortedRanges { position });
        }
    }
    Ok(())
}

/// Ranges are sorted and don't overlap.
pub fn verify_ranges_disjoint(ranges: &[HighlightRange]) -> Result<(), InvariantError> {
    verify_ranges_ordered(ranges)?;
    for position in 1..ranges.len() {
        if ranges[position].start <= ranges[position - 1].end {
            return Err(InvariantError::OverlappingRanges { position });
        }
    }
    Ok(())
}

/// Contract for a single field's match.
pub fn verify_match_result(result: &MatchResult) -> Result<(), InvariantError> {
    match result.tier {
        MatchTier::MultiWord => verify_ranges_ordered(&result.ranges),
        _ => verify_ranges_disjoint(&result.ranges),
    }
}

// ============================================================================
// SEARCH OUTPUT CONTRACTS
// ============================================================================

/// Contract for collection search output.
pub fn verify_search_results<T>(results: &[SearchResult<'_, T>]) -> Result<(), InvariantError> {
    for (position, result) in results.iter().enumerate() {
        if position > 0 {
            let previous = results[position - 1].score;
            if previous > result.score {
                return Err(InvariantError::UnsortedResults {
                    position,
                    previous,
                    current: result.score,
                });
            }
        }

        if result.matches.iter().all(Option::is_none) {
            return Err(InvariantError::NoMatchingField { position });
        }

        for ranges in result.matches.iter().flatten() {
            verify_ranges_ordered(ranges)?;
        }
    }
    Ok(())
}

/// Every result has exactly `field_count` field entries.
pub fn verify_field_count<T>(
    results: &[SearchResult<'_, T>],
    field_count: usize,
) -> Result<(), InvariantError> {
    for (position, result) in results.iter().enumerate() {
        if result.matches.len() != field_count {
            return Err(InvariantError::FieldCountMismatch {
                position,
                expected: field_count,
                actual: result.matches.len(),
            });
        }
    }
    Ok(())
}

// ============================================================================
// DEBUG CHECKS
// ============================================================================

/// Panics (debug builds only) if a match result breaks its contract.
#[inline]
pub fn check_match_result(result: &MatchResult) {
    #[cfg(debug_assertions)]
    if let Err(err) = verify_match_result(result) {
        panic!("Contract violation: {} in {:?}", err, result);
    }
    #[cfg(not(debug_assertions))]
    let _ = result;
}

/// Panics (debug builds only) if search output breaks its contract.
#[inline]
pub fn check_search_results<T>(results: &[SearchResult<'_, T>]) {
    #[cfg(debug_assertions)]
    if let Err(err) = verify_search_results(results) {
        panic!("Contract violation: {}", err);
    }
    #[cfg(not(debug_assertions))]
    let _ = results;
}
