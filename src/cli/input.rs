// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a collection for `sifter search`.
//!
//! Input that parses as a JSON array is taken item by item (strings, numbers,
//! objects). Anything else is plain text: one item per non-empty line.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Read the raw input from `path`, or stdin when there is none.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

/// Split raw input into collection items.
pub fn parse_collection(source: &str) -> Vec<Value> {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(source) {
        tracing::debug!(items = items.len(), "loaded JSON collection");
        return items;
    }

    let items: Vec<Value> = source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Value::String(line.to_string()))
        .collect();
    tracing::debug!(items = items.len(), "loaded line collection");
    items
}

/// [`read_source`] then [`parse_collection`].
pub fn load_collection(path: Option<&Path>) -> Result<Vec<Value>> {
    let source = read_source(path)?;
    Ok(parse_collection(&source))
}
