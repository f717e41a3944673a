// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Matching itself never fails: a matcher either finds something or returns
//! `None`. The only fallible operations are parsing configuration and the
//! contract checks in [`contracts`](crate::contracts).

use thiserror::Error;

/// Configuration and input errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Strategy label other than `off`, `smart` or `aggressive`.
    #[error("unknown strategy '{0}' (expected off, smart or aggressive)")]
    UnknownStrategy(String),
}

/// A broken output invariant, reported by the `verify_*` contract functions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvariantError {
    /// `start > end` in an inclusive range.
    #[error("range {position} is inverted: start {start} > end {end}")]
    InvertedRange {
        position: usize,
        start: usize,
        end: usize,
    },
    /// Range starts before the previous one.
    #[error("ranges not sorted at position {position}")]
    UnsortedRanges { position: usize },
    /// Range starts inside the previous one.
    #[error("range {position} overlaps the previous range")]
    OverlappingRanges { position: usize },
    /// Search output score decreased between neighbours.
    #[error("results not sorted by score at position {position}: {previous} > {current}")]
    UnsortedResults {
        position: usize,
        previous: f64,
        current: f64,
    },
    /// A result in the output has no matching field.
    #[error("result {position} has no matching field")]
    NoMatchingField { position: usize },
    /// Per-field match list has the wrong length.
    #[error("result {position} has {actual} field entries, expected {expected}")]
    FieldCountMismatch {
        position: usize,
        expected: usize,
        actual: usize,
    },
}
