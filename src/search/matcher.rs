// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The match orchestrator: run the tiers in order, take the first hit.
//!
//! ```text
//! exact tiers ──▶ multi-word ──▶ contains ──▶ smart | aggressive | off
//!  0 … 1.0        1.5 + 0.2n       2.0           2.0 + chunk penalties
//! ```
//!
//! The order is the scoring contract. A later tier never runs once an earlier
//! one has matched, so a field's score always comes from exactly one tier.
//!
//! Text and query are prepared once ([`PreparedText`], [`PreparedQuery`]) so a
//! collection search pays for normalization at build time, not per query.

use std::collections::HashSet;

use crate::contracts;
use crate::types::{FuzzyResult, MatchResult, Strategy};
use crate::util::normalize::normalize;

use super::aggressive::aggressive_fuzzy_match;
use super::multi_word::match_multi_word;
use super::smart::smart_fuzzy_match;
use super::tiered::{match_contains, match_exact_tiers};

// =============================================================================
// PREPARED FORMS
// =============================================================================

/// One field's text with everything the matchers need precomputed.
///
/// Immutable once built: if the source text changes, build a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText {
    pub(crate) original: String,
    pub(crate) original_chars: Vec<char>,
    pub(crate) normalized: String,
    pub(crate) normalized_chars: Vec<char>,
    pub(crate) words: HashSet<String>,
}

impl PreparedText {
    pub fn new(text: impl Into<String>) -> Self {
        let original = text.into();
        let normalized = normalize(&original);
        let words = normalized.split(' ').map(str::to_string).collect();
        Self {
            original_chars: original.chars().collect(),
            normalized_chars: normalized.chars().collect(),
            original,
            normalized,
            words,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Space-separated tokens of the normalized text.
    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }
}

impl From<&str> for PreparedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// A query with its normalized form and words.
///
/// Words come from splitting the normalized query on single spaces, so
/// `"a  b"` yields `["a", "", "b"]`. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    pub(crate) original: String,
    pub(crate) original_chars: Vec<char>,
    pub(crate) normalized: String,
    pub(crate) normalized_chars: Vec<char>,
    pub(crate) words: Vec<String>,
}

impl PreparedQuery {
    pub fn new(query: impl Into<String>) -> Self {
        let original = query.into();
        let normalized = normalize(&original);
        let words = normalized.split(' ').map(str::to_string).collect();
        Self {
            original_chars: original.chars().collect(),
            normalized_chars: normalized.chars().collect(),
            original,
            normalized,
            words,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Nothing left after normalization (empty or all whitespace).
    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }
}

impl From<&str> for PreparedQuery {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

// =============================================================================
// ORCHESTRATOR
// =============================================================================

/// Match one prepared field against a prepared query.
///
/// Tries, in order: exact tiers, multi-word, contains, then the strategy's
/// fuzzy matcher. Returns the first result, or `None`.
pub fn match_prepared(
    text: &PreparedText,
    query: &PreparedQuery,
    strategy: Strategy,
) -> Option<MatchResult> {
    let result = match_exact_tiers(text, query)
        .or_else(|| match_multi_word(text, query))
        .or_else(|| match_contains(text, query))
        .or_else(|| match strategy {
            Strategy::Off => None,
            Strategy::Smart => smart_fuzzy_match(&text.normalized_chars, &query.normalized_chars),
            Strategy::Aggressive => {
                aggressive_fuzzy_match(&text.normalized_chars, &query.normalized_chars)
            }
        });

    if let Some(result) = &result {
        contracts::check_match_result(result);
    }
    result
}

/// Match a single string against a query with the smart strategy.
///
/// Unlike [`FuzzySearch::search`](crate::FuzzySearch::search), there is no
/// guard for a blank query: an empty query is a prefix of everything and
/// comes back as a prefix match with no highlight ranges.
///
/// # Example
///
/// ```
/// let result = sifter::match_one("Hello World", "wor").unwrap();
/// assert_eq!(result.score, 1.0);
/// assert_eq!(result.ranges[0].start, 6);
/// assert_eq!(result.ranges[0].end, 8);
/// ```
pub fn match_one(text: &str, query: &str) -> Option<FuzzyResult> {
    match_with_strategy(text, query, Strategy::Smart)
}

/// [`match_one`] with an explicit fuzzy strategy.
pub fn match_with_strategy(text: &str, query: &str, strategy: Strategy) -> Option<FuzzyResult> {
    let prepared = PreparedText::new(text);
    let query = PreparedQuery::new(query);

    match_prepared(&prepared, &query, strategy).map(|result| FuzzyResult {
        item: prepared.original,
        score: result.score,
        ranges: result.ranges,
        tier: result.tier,
    })
}
