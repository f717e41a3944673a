// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for collection search.
//!
//! Builds a search over arbitrary items and checks the output contract on an
//! arbitrary query: sorted by score, one entry per field, and no item without
//! a matching field.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sifter::contracts::{verify_field_count, verify_search_results};
use sifter::{build_search, SearchOptions, Strategy};

#[derive(Debug, Arbitrary)]
struct Input {
    items: Vec<String>,
    query: String,
    aggressive: bool,
}

fuzz_target!(|input: Input| {
    let items: Vec<String> = input
        .items
        .into_iter()
        .take(64)
        .map(|item| item.chars().take(100).collect())
        .collect();
    let query: String = input.query.chars().take(30).collect();
    let strategy = if input.aggressive {
        Strategy::Aggressive
    } else {
        Strategy::Smart
    };

    let count = items.len();
    let search = build_search(items, SearchOptions::new().with_strategy(strategy));
    let results = search.search(&query);

    // INVARIANT 1: never more results than items
    assert!(results.len() <= count);

    // INVARIANT 2: output contract
    if let Err(err) = verify_search_results(&results) {
        panic!("contract violated for {:?}: {}", query, err);
    }
    if let Err(err) = verify_field_count(&results, 1) {
        panic!("contract violated for {:?}: {}", query, err);
    }

    // INVARIANT 3: blank queries return nothing
    if query.trim().is_empty() {
        assert!(results.is_empty());
    }
});
