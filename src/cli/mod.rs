// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sifter command-line interface.
//!
//! Three subcommands: `search` to rank a collection (a JSON array or one item
//! per line) against a query, `match` for a one-off text/query pair, and
//! `normalize` to see what the matchers actually compare.

pub mod display;
pub mod input;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sifter::Strategy;

#[derive(Parser)]
#[command(
    name = "sifter",
    about = "Tiered fuzzy matching with highlight ranges",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a collection against a query
    Search {
        /// Search query
        query: String,

        /// Input file: a JSON array of strings or objects, or one item per line.
        /// Reads stdin when omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Object field to match against (JSON input only)
        #[arg(short, long)]
        key: Option<String>,

        /// Fuzzy fallback: off, smart or aggressive
        #[arg(short, long, default_value = "smart")]
        strategy: Strategy,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Match items across the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },

    /// Match a single text against a query
    Match {
        /// Text to match against
        text: String,

        /// Search query
        query: String,

        /// Fuzzy fallback: off, smart or aggressive
        #[arg(short, long, default_value = "smart")]
        strategy: Strategy,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized form of a text
    Normalize {
        /// Text to normalize
        text: String,
    },
}
