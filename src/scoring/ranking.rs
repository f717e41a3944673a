// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: ascending by score, nothing else.
//!
//! Equal scores keep no particular order. Callers that need determinism
//! should sort again with their own tiebreaker.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two search results for ranking. Lower score sorts first.
///
/// Uses `total_cmp`, so a NaN score (never produced by the matchers) sorts
/// last instead of poisoning the sort.
#[inline]
pub fn compare_results<T>(a: &SearchResult<'_, T>, b: &SearchResult<'_, T>) -> Ordering {
    a.score.total_cmp(&b.score)
}

/// Sort results best first. Not stable.
pub fn sort_results<T>(results: &mut [SearchResult<'_, T>]) {
    results.sort_unstable_by(compare_results);
}
