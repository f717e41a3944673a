// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collection search: prepare once, query many times.
//!
//! Building a [`FuzzySearch`] runs field extraction and normalization for
//! every item up front. Each query then only normalizes itself and runs the
//! orchestrator per field. For a command palette with a few thousand entries
//! that is the difference between normalizing on every keystroke and not.
//!
//! Per query:
//!
//! 1. Normalize the query. Blank → no results.
//! 2. For each item, match every field; keep the best (lowest) score and the
//!    per-field ranges (`None` for fields that didn't match).
//! 3. Drop items where no field matched.
//! 4. Sort ascending by score. Equal scores come out in no particular order.

mod fields;
#[cfg(feature = "parallel")]
mod parallel;

use std::fmt;

use crate::contracts;
use crate::scoring::ranking::sort_results;
use crate::search::matcher::{match_prepared, PreparedQuery, PreparedText};
use crate::types::{FuzzyMatches, SearchResult, Strategy};

pub use fields::{item_extractor, key_extractor, FieldExtractor, SearchText};

// =============================================================================
// OPTIONS
// =============================================================================

/// How to build a search.
///
/// Field selection, highest precedence first: `get_text`, then `key`, then
/// the item itself via [`SearchText::search_text`].
pub struct SearchOptions<T> {
    pub key: Option<String>,
    pub get_text: Option<FieldExtractor<T>>,
    pub strategy: Strategy,
}

impl<T> Default for SearchOptions<T> {
    fn default() -> Self {
        Self {
            key: None,
            get_text: None,
            strategy: Strategy::default(),
        }
    }
}

impl<T> fmt::Debug for SearchOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("key", &self.key)
            .field("get_text", &self.get_text.as_ref().map(|_| "<fn>"))
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl<T> SearchOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_get_text<F>(mut self, get_text: F) -> Self
    where
        F: Fn(&T) -> Vec<Option<String>> + Send + Sync + 'static,
    {
        self.get_text = Some(Box::new(get_text));
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl<T: SearchText + 'static> SearchOptions<T> {
    /// Resolve field selection into a single extractor.
    fn into_parts(self) -> (FieldExtractor<T>, Strategy) {
        let extractor = match (self.get_text, self.key) {
            (Some(get_text), _) => get_text,
            (None, Some(key)) => key_extractor(key),
            (None, None) => item_extractor(),
        };
        (extractor, self.strategy)
    }
}

// =============================================================================
// SEARCH
// =============================================================================

/// An item with its fields prepared for matching.
struct PreparedItem<T> {
    item: T,
    fields: Vec<PreparedText>,
}

/// A collection prepared for repeated fuzzy queries.
pub struct FuzzySearch<T> {
    entries: Vec<PreparedItem<T>>,
    strategy: Strategy,
}

impl<T> fmt::Debug for FuzzySearch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzySearch")
            .field("items", &self.entries.len())
            .field("strategy", &self.strategy)
            .finish()
    }
}

/// Build a search over `collection` using `options` to pick fields.
///
/// # Example
///
/// ```
/// use sifter::{build_search, SearchOptions};
///
/// let search = build_search(vec!["apple", "banana", "cherry"], SearchOptions::default());
/// let results = search.search("ban");
/// assert_eq!(results.len(), 1);
/// assert_eq!(*results[0].item, "banana");
/// assert_eq!(results[0].score, 0.5);
/// ```
pub fn build_search<T: SearchText + 'static>(
    collection: impl IntoIterator<Item = T>,
    options: SearchOptions<T>,
) -> FuzzySearch<T> {
    let (extractor, strategy) = options.into_parts();
    FuzzySearch::with_extractor(collection, extractor, strategy)
}

impl<T> FuzzySearch<T> {
    /// Build a search with an explicit field extractor; works for any item type.
    pub fn with_extractor<F>(
        collection: impl IntoIterator<Item = T>,
        extract: F,
        strategy: Strategy,
    ) -> Self
    where
        F: Fn(&T) -> Vec<Option<String>>,
    {
        let entries: Vec<PreparedItem<T>> = collection
            .into_iter()
            .map(|item| {
                let fields = extract(&item)
                    .into_iter()
                    .map(|text| PreparedText::new(text.unwrap_or_default()))
                    .collect();
                PreparedItem { item, fields }
            })
            .collect();

        tracing::debug!(
            items = entries.len(),
            fields = entries.iter().map(|entry| entry.fields.len()).sum::<usize>(),
            strategy = %strategy,
            "prepared fuzzy search collection"
        );

        Self { entries, strategy }
    }

    /// Run a query. Results are sorted best first.
    pub fn search(&self, query: &str) -> Vec<SearchResult<'_, T>> {
        let _span = tracing::trace_span!("fuzzy_search", query, items = self.entries.len()).entered();

        let query = PreparedQuery::new(query);
        if query.is_blank() {
            return Vec::new();
        }

        let mut results: Vec<SearchResult<'_, T>> = self
            .entries
            .iter()
            .filter_map(|entry| match_entry(entry, &query, self.strategy))
            .collect();
        sort_results(&mut results);

        contracts::check_search_results(&results);
        tracing::debug!(matches = results.len(), "fuzzy search finished");
        results
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Items in collection order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.item)
    }
}

/// Match every field of one item. `None` if no field matched.
fn match_entry<'a, T>(
    entry: &'a PreparedItem<T>,
    query: &PreparedQuery,
    strategy: Strategy,
) -> Option<SearchResult<'a, T>> {
    let mut best: Option<f64> = None;
    let matches: FuzzyMatches = entry
        .fields
        .iter()
        .map(|field| {
            let result = match_prepared(field, query, strategy)?;
            best = Some(best.map_or(result.score, |score: f64| score.min(result.score)));
            Some(result.ranges)
        })
        .collect();

    best.map(|score| SearchResult {
        item: &entry.item,
        score,
        matches,
    })
}
