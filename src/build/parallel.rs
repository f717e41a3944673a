// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel query path.
//!
//! Every item matches independently, so a query is a plain map-then-merge:
//! `par_iter()` over the prepared items, collect the hits, sort once. The
//! sort only looks at scores, so the result is the same as the sequential
//! path up to the order of equal scores.

use rayon::prelude::*;

use crate::contracts;
use crate::scoring::ranking::sort_results;
use crate::search::matcher::PreparedQuery;
use crate::types::SearchResult;

use super::{match_entry, FuzzySearch};

impl<T: Sync> FuzzySearch<T> {
    /// [`search`](FuzzySearch::search) across the rayon thread pool.
    ///
    /// Worth it for large collections; for a few hundred items the
    /// sequential path is usually faster.
    pub fn search_parallel(&self, query: &str) -> Vec<SearchResult<'_, T>> {
        let _span =
            tracing::trace_span!("fuzzy_search_parallel", query, items = self.entries.len())
                .entered();

        let query = PreparedQuery::new(query);
        if query.is_blank() {
            return Vec::new();
        }

        let mut results: Vec<SearchResult<'_, T>> = self
            .entries
            .par_iter()
            .filter_map(|entry| match_entry(entry, &query, self.strategy))
            .collect();
        sort_results(&mut results);

        contracts::check_search_results(&results);
        tracing::debug!(matches = results.len(), "fuzzy search finished");
        results
    }
}
