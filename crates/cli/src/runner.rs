// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conformance runner.
//!
//! Walks each declared category directory, runs the compiler once per
//! file and compares what it reported against the category's expectation.
//! Tests run strictly one after another.

use crate::category::{Category, CategoryTable};
use crate::compiler::{Compiler, DiagnosticPolicy};
use crate::output_diagnostic::print_warning;
use k0test_capture::OutputSink;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Classification of a single compiler run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    /// The compiler could not be run at all
    RunnerError,
}

/// One file to feed the compiler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub path: PathBuf,
    pub expect_error: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestResult {
    pub path: PathBuf,
    pub expect_error: bool,
    /// `None` when the compiler never produced output to judge
    pub observed_error: Option<bool>,
    pub outcome: Outcome,
}

/// Totals across a whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    /// Subset of the non-passing tests that never ran
    pub errors: usize,
    pub results: Vec<TestResult>,
}

impl Summary {
    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    fn record(&mut self, result: TestResult) {
        self.total += 1;
        match result.outcome {
            Outcome::Pass => self.passed += 1,
            Outcome::Fail => {}
            Outcome::RunnerError => self.errors += 1,
        }
        self.results.push(result);
    }

    /// The block printed at the end of every run.
    pub fn render(&self) -> Vec<String> {
        vec![
            String::new(),
            "=== TEST SUMMARY ===".to_string(),
            format!("Total Tests: {}", self.total),
            format!("Passed: {}", self.passed),
            format!("Failed: {}", self.failed()),
        ]
    }
}

/// Runs the corpus against one compiler, reporting to an [`OutputSink`].
#[derive(Clone, Debug)]
pub struct Runner {
    compiler: Compiler,
    policy: DiagnosticPolicy,
    sink: OutputSink,
}

impl Runner {
    pub fn new(compiler: Compiler, sink: OutputSink) -> Self {
        Self {
            compiler,
            policy: DiagnosticPolicy::default(),
            sink,
        }
    }

    pub fn with_policy(mut self, policy: DiagnosticPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    /// Run every category under `test_root` in declared order.
    ///
    /// Missing category directories are skipped with a warning. Failing to
    /// list a directory that does exist aborts the run.
    pub async fn run_suite(
        &self,
        test_root: &Path,
        categories: &CategoryTable,
    ) -> Result<Summary, SuiteError> {
        let mut summary = Summary::default();

        for category in categories.iter() {
            let dir = test_root.join(&category.name);
            if !dir.is_dir() {
                print_warning(format_args!(
                    "Test folder '{}' not found, skipping...",
                    dir.display()
                ));
                continue;
            }

            for case in discover(&dir, category)? {
                let result = self.run_test(&case.path, case.expect_error).await?;
                summary.record(result);
            }
        }

        for line in summary.render() {
            self.sink.write_line(line)?;
        }
        self.sink.flush()?;

        Ok(summary)
    }

    /// Run the compiler on one file and report the outcome.
    ///
    /// Only a failure to write the report is returned as an error; a
    /// compiler that cannot be run is an [`Outcome::RunnerError`].
    pub async fn run_test(&self, path: &Path, expect_error: bool) -> Result<TestResult, SuiteError> {
        let output = match self.compiler.invoke(path).await {
            Ok(output) => output,
            Err(e) => {
                self.sink
                    .write_line(format_args!("ERROR running {}: {}", path.display(), e))?;
                return Ok(TestResult {
                    path: path.to_path_buf(),
                    expect_error,
                    observed_error: None,
                    outcome: Outcome::RunnerError,
                });
            }
        };

        let observed_error = self.policy.has_diagnostics(&output);
        let outcome = if observed_error == expect_error {
            self.sink.write_line(format_args!("PASS: {}", path.display()))?;
            Outcome::Pass
        } else {
            self.sink.write_line(format_args!("FAIL: {}", path.display()))?;
            self.sink.write_line(format_args!(
                "Expected {}, but got:",
                if expect_error { "Error" } else { "No Error" }
            ))?;
            let shown = if observed_error {
                &output.stderr
            } else {
                &output.stdout
            };
            self.sink.write_line(shown)?;
            Outcome::Fail
        };

        Ok(TestResult {
            path: path.to_path_buf(),
            expect_error,
            observed_error: Some(observed_error),
            outcome,
        })
    }
}

/// Regular files directly inside `dir`, sorted by file name.
pub fn discover(dir: &Path, category: &Category) -> Result<Vec<TestCase>, SuiteError> {
    let read_dir_error = |source| SuiteError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(paths
        .into_iter()
        .map(|path| TestCase {
            path,
            expect_error: category.expect_error,
        })
        .collect())
}

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Failed to read test folder {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write test report: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
