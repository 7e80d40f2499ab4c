// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand implementations behind the `k0test` binary.

use crate::catalog;
use crate::category::CategoryTable;
use crate::cli::{GenLexArgs, RunArgs};
use crate::compiler::Compiler;
use crate::config::{ConfigError, HarnessConfig};
use crate::exit_codes;
use crate::fixtures::{self, FixtureError};
use crate::output_diagnostic::{print_note, print_warning};
use crate::report::{run_reported, ReportDestination, ReportError};
use crate::runner::{Runner, Summary};
use k0test_capture::OutputSink;
use thiserror::Error;

/// Write lexer fixtures, reporting the count on `sink`.
pub fn gen_lex(
    config: &HarnessConfig,
    args: &GenLexArgs,
    sink: &OutputSink,
) -> Result<i32, CommandError> {
    let out_dir = args.out_dir.as_ref().unwrap_or(&config.fixtures.dir);
    let tokens = match args.catalog.as_ref().or(config.fixtures.catalog.as_ref()) {
        Some(path) => fixtures::load_catalog(path)?,
        None => catalog::illegal_tokens(),
    };

    let written = fixtures::generate(&tokens, out_dir)?;
    sink.write_line(fixtures::describe(written.len(), out_dir))
        .map_err(CommandError::Output)?;
    Ok(exit_codes::SUCCESS)
}

/// Run the conformance suite with CLI flags layered over `config`.
pub async fn run(
    config: &HarnessConfig,
    args: &RunArgs,
    sink: &OutputSink,
    verbose: bool,
) -> Result<i32, CommandError> {
    let categories = if args.categories.is_empty() {
        config.categories.clone()
    } else {
        config.categories.select(&args.categories).map_err(ConfigError::from)?
    };
    let compiler = Compiler::new(args.compiler.as_ref().unwrap_or(&config.compiler))
        .with_timeout(args.timeout_ms.unwrap_or(config.timeout_ms));
    let policy = args.policy.unwrap_or(config.policy);
    let test_root = args.test_root.as_ref().unwrap_or(&config.test_root);
    let destination = match args.transcript.as_ref().or(config.transcript.as_ref()) {
        Some(path) => ReportDestination::Transcript(path.clone()),
        None => ReportDestination::Console,
    };

    if verbose {
        print_note(format_args!(
            "compiler {} (timeout {}ms, policy {})",
            compiler.executable().display(),
            compiler.timeout_ms(),
            policy
        ));
        print_note(format_args!(
            "test root {}, categories {}",
            test_root.display(),
            categories.names().join(", ")
        ));
    }

    let runner = Runner::new(compiler, sink.clone()).with_policy(policy);
    let summary = run_reported(&runner, &destination, test_root, &categories).await?;

    if summary.errors > 0 {
        print_warning(format_args!(
            "{} of {} tests could not be run",
            summary.errors, summary.total
        ));
    }

    Ok(strict_exit_code(args.strict, &summary))
}

/// Tests that never ran outrank plain failures under `--strict`.
fn strict_exit_code(strict: bool, summary: &Summary) -> i32 {
    if !strict || summary.all_passed() {
        exit_codes::SUCCESS
    } else if summary.errors > 0 {
        exit_codes::ERROR
    } else {
        exit_codes::TESTS_FAILED
    }
}

/// Print the effective category table.
pub fn categories(categories: &CategoryTable, sink: &OutputSink) -> Result<i32, CommandError> {
    for category in categories.iter() {
        let expectation = if category.expect_error {
            "error"
        } else {
            "no-error"
        };
        sink.write_line(format_args!("{}\t{}", category.name, expectation))
            .map_err(CommandError::Output)?;
    }
    Ok(exit_codes::SUCCESS)
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Failed to write output: {0}")]
    Output(std::io::Error),
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
