// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tiered fuzzy matching with highlight ranges.
//!
//! Given a short query and a collection of items (strings or records with
//! several text fields), rank the items that match and say which characters
//! matched, so a UI can highlight them. Built for command palettes, pickers and
//! autocomplete lists: small collections, a query per keystroke.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │    util/     │────▶│     search/      │────▶│    build/    │
//! │ (normalize,  │     │ (tiers, fuzzy,   │     │ (FuzzySearch,│
//! │  boundary)   │     │  orchestrator)   │     │  fields)     │
//! └──────────────┘     └──────────────────┘     └──────────────┘
//!        │                      │                      │
//!        ▼                      ▼                      ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    scoring/ + contracts                     │
//! │  (tier scores, chunk penalties, output invariants)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Tiers
//!
//! Lower score is better. The first tier that matches decides the score.
//!
//! | Tier                      | Score              | Ranges index     |
//! |---------------------------|--------------------|------------------|
//! | exact                     | 0.0                | original text    |
//! | normalized exact          | 0.1                | normalized text  |
//! | prefix                    | 0.5                | normalized text  |
//! | exact-case word contains  | 0.9                | original text    |
//! | word contains             | 1.0                | normalized text  |
//! | multi-word (n words)      | 1.5 + 0.2·n        | normalized text  |
//! | contains                  | 2.0                | normalized text  |
//! | fuzzy (smart/aggressive)  | 2.0 + penalties    | normalized text  |
//!
//! # Usage
//!
//! ```
//! use sifter::{build_search, SearchOptions, Strategy};
//!
//! let search = build_search(
//!     vec!["Open File", "Save All", "Toggle Line Comment"],
//!     SearchOptions::new().with_strategy(Strategy::Smart),
//! );
//!
//! let results = search.search("tlc");
//! assert_eq!(*results[0].item, "Toggle Line Comment");
//! ```

pub mod build;
pub mod contracts;
pub mod error;
pub mod highlight;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;
pub mod util;

// Re-exports for public API
pub use build::{
    build_search, item_extractor, key_extractor, FieldExtractor, FuzzySearch, SearchOptions,
    SearchText,
};
pub use error::{Error, InvariantError};
pub use highlight::{highlight_segments, highlight_with, Segment};
pub use scoring::score_consecutive_chunks;
pub use search::{
    aggressive_fuzzy_match, match_contains, match_exact_tiers, match_multi_word, match_one,
    match_prepared, match_with_strategy, smart_fuzzy_match, PreparedQuery, PreparedText,
};
pub use types::{
    FuzzyMatches, FuzzyResult, HighlightRange, HighlightRanges, MatchResult, MatchTier,
    SearchResult, Strategy,
};
pub use util::boundary::{is_boundary, BOUNDARY_CHARS};
pub use util::normalize::normalize;
