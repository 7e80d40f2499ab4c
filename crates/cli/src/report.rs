// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Where a run's report goes: the live console or a transcript file.

use crate::category::CategoryTable;
use crate::runner::{Runner, Summary, SuiteError};
use k0test_capture::OutputSink;
use std::future::Future;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Transcript file name used when `--transcript` is given without a path.
pub const DEFAULT_TRANSCRIPT: &str = "test_results.txt";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportDestination {
    Console,
    Transcript(PathBuf),
}

/// Run the suite, reporting to `destination`.
pub async fn run_reported(
    runner: &Runner,
    destination: &ReportDestination,
    test_root: &Path,
    categories: &CategoryTable,
) -> Result<Summary, ReportError> {
    match destination {
        ReportDestination::Console => Ok(runner.run_suite(test_root, categories).await?),
        ReportDestination::Transcript(path) => {
            capture_to_transcript(runner.sink(), path, runner.run_suite(test_root, categories))
                .await
        }
    }
}

/// Drive `run` with `sink` redirected into a fresh transcript at `path`.
///
/// The sink is restored on every exit path, including errors and panics
/// inside `run`. Only after restoring is the confirmation line written,
/// so it never lands in the transcript.
pub async fn capture_to_transcript<T, F>(
    sink: &OutputSink,
    path: &Path,
    run: F,
) -> Result<T, ReportError>
where
    F: Future<Output = Result<T, SuiteError>>,
{
    let guard = sink
        .redirect_to_file(path)
        .map_err(|source| ReportError::Transcript {
            path: path.to_path_buf(),
            source,
        })?;

    let outcome = run.await;
    let restored = guard.restore();

    let value = outcome?;
    restored.map_err(|source| ReportError::Transcript {
        path: path.to_path_buf(),
        source,
    })?;

    sink.write_line(format_args!("Test results written to {}", path.display()))
        .map_err(SuiteError::from)?;
    Ok(value)
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write transcript {}: {source}", path.display())]
    Transcript {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Suite(#[from] SuiteError),
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
