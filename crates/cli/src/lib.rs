// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! k0 conformance test harness
//!
//! Generates negative lexer fixtures from a catalog of tokens the k0 subset
//! forbids, then drives the compiler over a categorized corpus and checks
//! that it rejects exactly the inputs each category says it should.
//!
//! ```text
//! tests/
//! ├── errors/   every file must produce diagnostics
//! ├── k0/       every file must compile cleanly
//! └── kotlin/   full-Kotlin inputs the subset must reject
//! ```

pub mod catalog;
pub mod category;
pub mod cli;
pub mod commands;
pub mod compiler;
pub mod config;
pub mod env;
pub mod fixtures;
pub mod output_diagnostic;
pub mod report;
pub mod runner;

#[cfg(test)]
mod test_helpers;

/// Process exit codes for the `k0test` binary.
///
/// The compiler's own exit status is never passed through.
pub mod exit_codes {
    /// The command completed
    pub const SUCCESS: i32 = 0;
    /// Harness failure: bad config, unwritable output, unreadable corpus,
    /// or `run --strict` with tests the compiler could not be run on
    pub const ERROR: i32 = 1;
    /// `run --strict` and at least one test failed
    pub const TESTS_FAILED: i32 = 2;
}
