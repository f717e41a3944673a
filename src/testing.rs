// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::build::FuzzySearch;
use crate::types::Strategy;

/// The short fruit list most ranking tests start from.
pub const FRUITS: [&str; 4] = ["apple", "banana", "cherry", "grape"];

/// A command palette entry: a title and an optional subtitle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub title: String,
    pub subtitle: Option<String>,
}

/// Create a palette command.
pub fn make_command(title: &str, subtitle: Option<&str>) -> Command {
    Command {
        title: title.to_string(),
        subtitle: subtitle.map(str::to_string),
    }
}

/// A small, realistic command palette.
pub fn palette() -> Vec<Command> {
    vec![
        make_command("Open File", Some("Browse the workspace")),
        make_command("Open Recent", Some("Reopen a recently closed file")),
        make_command("Save All", None),
        make_command("Toggle Line Comment", Some("Editor (Ctrl+/)")),
        make_command("Go to Definition", Some("Jump to symbol")),
        make_command("Git: Pull (Rebase)", Some("Source control")),
        make_command("Preferences: Color Theme", None),
        make_command("Crème Brûlée Recipes", Some("Desserts")),
    ]
}

/// Title then subtitle.
pub fn command_fields(command: &Command) -> Vec<Option<String>> {
    vec![Some(command.title.clone()), command.subtitle.clone()]
}

/// Search over [`palette`] with the given strategy.
pub fn palette_search(strategy: Strategy) -> FuzzySearch<Command> {
    FuzzySearch::with_extractor(palette(), command_fields, strategy)
}

/// `count` synthetic multi-word titles, for benches and parallel tests.
pub fn make_titles(count: usize) -> Vec<String> {
    const WORDS: [&str; 8] = [
        "alpha", "build", "config", "delta", "editor", "format", "github", "history",
    ];
    (0..count)
        .map(|i| {
            format!(
                "{} {} {} {}",
                WORDS[i % WORDS.len()],
                WORDS[(i / 3) % WORDS.len()],
                WORDS[(i / 7 + 2) % WORDS.len()],
                i
            )
        })
        .collect()
}
