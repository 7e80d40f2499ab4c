// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface.

use crate::compiler::DiagnosticPolicy;
use clap::{Args, Parser, Subcommand};
use std::num::NonZeroU64;
use std::path::PathBuf;

/// Conformance test harness for the k0 compiler
#[derive(Parser, Debug)]
#[command(name = "k0test", version, about = "Conformance test harness for the k0 compiler")]
pub struct Cli {
    /// Harness config file (default: ./k0test.toml when present, or $K0TEST_CONFIG)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print harness notes to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate negative lexer fixtures, one per illegal token
    GenLex(GenLexArgs),

    /// Run the compiler against every category directory
    Run(RunArgs),

    /// Show the category table and what each category expects
    Categories,
}

#[derive(Args, Debug, Default)]
pub struct GenLexArgs {
    /// Directory to write fixtures into
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Token catalog file, one token per line (default: built-in catalog)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Compiler executable under test
    #[arg(long, value_name = "PATH")]
    pub compiler: Option<PathBuf>,

    /// Directory holding one sub-directory per category
    #[arg(long, value_name = "DIR")]
    pub test_root: Option<PathBuf>,

    /// Only run these categories (repeatable)
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Per-invocation compiler timeout in milliseconds (at least 1)
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<NonZeroU64>,

    /// How compiler output is judged
    #[arg(long, value_enum)]
    pub policy: Option<DiagnosticPolicy>,

    /// Write the report to FILE instead of the console
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = crate::report::DEFAULT_TRANSCRIPT)]
    pub transcript: Option<PathBuf>,

    /// Exit with status 2 unless every test passed
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
