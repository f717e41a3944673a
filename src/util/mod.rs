// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String utilities every matcher leans on.
//!
//! Normalization for accent- and case-insensitive comparison, and the word
//! boundary classifier that decides whether a match sits at a word edge.

pub mod boundary;
pub mod normalize;
