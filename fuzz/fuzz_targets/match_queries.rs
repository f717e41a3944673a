// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for single text/query matching.
//!
//! Arbitrary text against an arbitrary query under every strategy. The
//! matchers must never panic (no slicing past the end, no underflow in the
//! lookahead), and every result must carry a score that fits its tier.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sifter::contracts::verify_ranges_ordered;
use sifter::scoring::CONTAINS_SCORE;
use sifter::{match_with_strategy, MatchTier, Strategy};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    query: String,
    strategy: u8,
}

fuzz_target!(|input: Input| {
    // Cap lengths to avoid timeouts
    let text: String = input.text.chars().take(200).collect();
    let query: String = input.query.chars().take(50).collect();
    let strategy = Strategy::ALL[usize::from(input.strategy) % Strategy::ALL.len()];

    let Some(result) = match_with_strategy(&text, &query, strategy) else {
        return;
    };

    // INVARIANT 1: ranges are well-formed and ordered
    assert!(
        verify_ranges_ordered(&result.ranges).is_ok(),
        "bad ranges {:?} for {:?} / {:?}",
        result.ranges,
        text,
        query
    );

    // INVARIANT 2: fuzzy matches rank below every fixed tier
    if result.tier == MatchTier::Fuzzy {
        assert!(result.score > CONTAINS_SCORE);
        assert_ne!(strategy, Strategy::Off);
    } else {
        assert!(result.score < CONTAINS_SCORE + 1e-9 || result.tier == MatchTier::MultiWord);
    }

    // INVARIANT 3: the item is echoed back unchanged
    assert_eq!(result.item, text);
});
