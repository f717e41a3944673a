// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers.
//!
//! Each tier has a fixed score (or a formula, for multi-word matches). Fuzzy
//! matches are scored by how well their chunks line up with word edges.

mod core;
pub mod ranking;

pub use self::core::*;
