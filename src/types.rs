// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shapes that flow out of the matcher.
//!
//! A match is a score plus a list of highlight ranges. A search result is an
//! item, its best score across fields, and one range list (or `None`) per field.
//! That is the whole data model; everything else is how those numbers get made.
//!
//! | Rust Type          | Shape                                       |
//! |--------------------|---------------------------------------------|
//! | `HighlightRange`   | inclusive `[start, end]` char indices       |
//! | `HighlightRanges`  | `Vec<HighlightRange>`                       |
//! | `FuzzyMatches`     | `Vec<Option<HighlightRanges>>`, field order |
//! | `MatchResult`      | `(score, ranges)` for one field             |
//! | `FuzzyResult`      | one-off match: item text, score, ranges     |
//! | `SearchResult<T>`  | item, best score, per-field matches         |
//!
//! # Index spaces
//!
//! Ranges are char indices into *some* string: the original text for the tiers
//! that compare exact case, the normalized text for everything else. They are
//! only meaningful against the string the producing tier looked at. For text
//! whose normalized form has the same char count (ASCII, precomposed Latin),
//! the two spaces line up and ranges can be drawn over the original text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// =============================================================================
// HIGHLIGHT RANGES
// =============================================================================

/// Inclusive range of char indices to highlight.
///
/// Serializes as a two-element array, `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
}

impl HighlightRange {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of chars covered (the range is inclusive).
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

impl From<(usize, usize)> for HighlightRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<HighlightRange> for (usize, usize) {
    fn from(range: HighlightRange) -> Self {
        (range.start, range.end)
    }
}

/// Ranges for a single field, ascending by start.
pub type HighlightRanges = Vec<HighlightRange>;

/// One entry per field, in field order. `None` means the field did not match.
pub type FuzzyMatches = Vec<Option<HighlightRanges>>;

// =============================================================================
// MATCH RESULTS
// =============================================================================

/// Which tier produced a match, best first.
///
/// The declaration order is the order the orchestrator tries them in, so
/// `Ord` on this enum is the priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Byte-for-byte equal.
    Exact,
    /// Equal after normalization.
    NormalizedExact,
    /// Normalized text starts with the normalized query.
    Prefix,
    /// Exact-case substring at a word edge.
    ExactCaseWord,
    /// Normalized substring at a word edge.
    Word,
    /// Every query word is a word of the text.
    MultiWord,
    /// Normalized substring anywhere.
    Contains,
    /// Smart or aggressive fuzzy chunks.
    Fuzzy,
}

impl MatchTier {
    /// Do this tier's ranges index the original text (rather than the normalized one)?
    pub fn indexes_original(self) -> bool {
        matches!(self, MatchTier::Exact | MatchTier::ExactCaseWord)
    }
}

/// Outcome of matching one field against one query. Lower score is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    pub ranges: HighlightRanges,
    pub tier: MatchTier,
}

impl MatchResult {
    #[inline]
    pub fn new(tier: MatchTier, score: f64, ranges: HighlightRanges) -> Self {
        Self {
            score,
            ranges,
            tier,
        }
    }
}

/// Result of a one-off [`match_one`](crate::match_one) call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyResult {
    pub item: String,
    pub score: f64,
    pub ranges: HighlightRanges,
    pub tier: MatchTier,
}

/// A matched item from a collection search.
///
/// Invariant: at least one entry of `matches` is `Some`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<'a, T> {
    pub item: &'a T,
    pub score: f64,
    pub matches: FuzzyMatches,
}

// =============================================================================
// STRATEGY
// =============================================================================

/// Fuzzy fallback used when none of the fixed tiers match.
///
/// Chosen once when a search is built and passed down explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// No fuzzy fallback: only exact, prefix, word and contains tiers.
    Off,
    /// Chunks must start at a word boundary or match at least three chars in a row.
    #[default]
    Smart,
    /// Leftmost greedy subsequence; any scattered letters will do.
    Aggressive,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Off, Strategy::Smart, Strategy::Aggressive];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Off => "off",
            Strategy::Smart => "smart",
            Strategy::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Strategy::Off),
            "smart" => Ok(Strategy::Smart),
            "aggressive" => Ok(Strategy::Aggressive),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}
