// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for text normalization.
//!
//! Normalization runs on every item and every keystroke, so it has to be total
//! and stable: any UTF-8 in, no panic, and a second pass is a no-op.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sifter::normalize;

fuzz_target!(|text: &str| {
    let once = normalize(text);

    // INVARIANT 1: idempotent
    assert_eq!(normalize(&once), once, "not idempotent for {:?}", text);

    // INVARIANT 2: no surrounding whitespace
    assert_eq!(once.trim(), once);

    // INVARIANT 3: no combining marks from U+0300–U+036F
    assert!(!once.chars().any(|c| ('\u{0300}'..='\u{036F}').contains(&c)));
});
