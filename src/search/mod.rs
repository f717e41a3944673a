// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matchers: where a query meets a single field.
//!
//! Five fixed-score tiers, a multi-word tier, a contains tier and two fuzzy
//! strategies. The orchestrator in [`matcher`] runs them in order and stops at
//! the first hit, so cheap exact checks answer most queries and the fuzzy
//! scanners only run when nothing better fits.

pub mod aggressive;
pub mod matcher;
pub mod multi_word;
pub mod smart;
pub mod tiered;
pub mod utils;

pub use aggressive::aggressive_fuzzy_match;
pub use matcher::{match_one, match_prepared, match_with_strategy, PreparedQuery, PreparedText};
pub use multi_word::match_multi_word;
pub use smart::smart_fuzzy_match;
pub use tiered::{match_contains, match_exact_tiers};
