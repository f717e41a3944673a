// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use sifter::{
    build_search, match_with_strategy, normalize, FuzzySearch, MatchTier, SearchOptions,
    SearchResult, SearchText, Strategy,
};

mod cli;
use cli::display::{self, DIM, RESET};
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for `--json`. Filter from `SIFTER_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SIFTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            query,
            input,
            key,
            strategy,
            limit,
            json,
            parallel,
        } => {
            let collection = cli::input::load_collection(input.as_deref())?;
            run_search(collection, &query, key, strategy, limit, json, parallel)
        }
        Commands::Match {
            text,
            query,
            strategy,
            json,
        } => run_match(&text, &query, strategy, json),
        Commands::Normalize { text } => {
            println!("{}", normalize(&text));
            Ok(())
        }
    }
}

fn run_search(
    collection: Vec<Value>,
    query: &str,
    key: Option<String>,
    strategy: Strategy,
    limit: usize,
    json: bool,
    parallel: bool,
) -> Result<()> {
    let mut options = SearchOptions::new().with_strategy(strategy);
    if let Some(key) = &key {
        options = options.with_key(key.as_str());
    }
    let search = build_search(collection, options);

    let mut results = query_search(&search, query, parallel);
    results.truncate(limit);

    if json {
        let out = serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        println!("{}", out);
        return Ok(());
    }

    if results.is_empty() {
        println!("No matches for {:?}", query);
        return Ok(());
    }

    display::section_top(&format!("{} for {:?} ({})", plural(results.len()), query, strategy));
    for (rank, result) in results.iter().enumerate() {
        let text = field_text(result.item, key.as_deref());
        // Search results carry no tier; matching the field again recovers it.
        let shown = match match_with_strategy(&text, query, strategy) {
            Some(matched) => ranged_text(&text, matched.tier),
            None => Cow::Owned(normalize(&text)),
        };
        let ranges = result
            .matches
            .first()
            .and_then(Option::as_ref)
            .map(Vec::as_slice)
            .unwrap_or_default();
        display::row(&format!(
            " {}{:>3}{} {}  {}",
            DIM,
            rank + 1,
            RESET,
            display::score_value(result.score),
            display::highlighted(&shown, ranges)
        ));
    }
    display::section_bot();
    Ok(())
}

#[cfg(feature = "parallel")]
fn query_search<'a>(
    search: &'a FuzzySearch<Value>,
    query: &str,
    parallel: bool,
) -> Vec<SearchResult<'a, Value>> {
    if parallel {
        search.search_parallel(query)
    } else {
        search.search(query)
    }
}

#[cfg(not(feature = "parallel"))]
fn query_search<'a>(
    search: &'a FuzzySearch<Value>,
    query: &str,
    parallel: bool,
) -> Vec<SearchResult<'a, Value>> {
    if parallel {
        tracing::warn!("built without the `parallel` feature; searching sequentially");
    }
    search.search(query)
}

fn run_match(text: &str, query: &str, strategy: Strategy, json: bool) -> Result<()> {
    let result = match_with_strategy(text, query, strategy);

    if json {
        let out = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", out);
        return Ok(());
    }

    match result {
        Some(result) => println!(
            "{}  {}  {}",
            display::score_value(result.score),
            display::pad_right(&display::tier_label(result.tier), 10),
            display::highlighted(&ranged_text(&result.item, result.tier), &result.ranges)
        ),
        None => println!("No match"),
    }
    Ok(())
}

/// The raw text of the field a search result was ranked on.
fn field_text(item: &Value, key: Option<&str>) -> String {
    let text = match key {
        Some(key) => item.field(key),
        None => item.search_text(),
    };
    text.map(Cow::into_owned).unwrap_or_default()
}

/// The text a tier's ranges index into: the original for the exact tiers,
/// the normalized form for the rest.
fn ranged_text(text: &str, tier: MatchTier) -> Cow<'_, str> {
    if tier.indexes_original() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(normalize(text))
    }
}

fn plural(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", count)
    }
}
