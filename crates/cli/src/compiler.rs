// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Invoking the compiler under test.
//!
//! The compiler is a black box run as `<executable> <file>`. Its streams
//! are captured in full and judged by a [`DiagnosticPolicy`]; its exit
//! status is never propagated.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Compiler executable used when nothing else is configured.
pub const DEFAULT_COMPILER: &str = "./k0";

/// Upper bound on a single compiler run. Never zero.
pub const DEFAULT_TIMEOUT_MS: NonZeroU64 = match NonZeroU64::new(10_000) {
    Some(ms) => ms,
    None => NonZeroU64::MIN,
};

/// How a compiler run is judged to have reported diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticPolicy {
    /// Anything but whitespace on stderr
    #[default]
    Stderr,
    /// Non-zero exit status, or killed by a signal
    ExitCode,
}

impl DiagnosticPolicy {
    pub fn has_diagnostics(self, output: &CompilerOutput) -> bool {
        match self {
            DiagnosticPolicy::Stderr => !output.stderr.trim().is_empty(),
            DiagnosticPolicy::ExitCode => output.exit_code != Some(0),
        }
    }
}

/// Shows the name accepted by `--policy` and the config file.
impl fmt::Display for DiagnosticPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{:?}", self),
        }
    }
}

/// Captured result of one compiler run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompilerOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// The compiler executable plus how long a single run may take.
#[derive(Clone, Debug)]
pub struct Compiler {
    executable: PathBuf,
    timeout_ms: NonZeroU64,
}

impl Compiler {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: NonZeroU64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms.get()
    }

    /// Run the compiler on `file` and wait for it to finish.
    pub async fn invoke(&self, file: &Path) -> Result<CompilerOutput, InvokeError> {
        let child = Command::new(&self.executable)
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| InvokeError::Spawn(e.to_string()))?;

        // Dropping the child on timeout kills it.
        let timeout = Duration::from_millis(self.timeout_ms.get());
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| InvokeError::Io(e.to_string()))?,
            Err(_) => {
                return Err(InvokeError::Timeout {
                    timeout_ms: self.timeout_ms.get(),
                })
            }
        };

        Ok(CompilerOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(DEFAULT_COMPILER)
    }
}

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to start compiler: {0}")]
    Spawn(String),

    #[error("compiler I/O error: {0}")]
    Io(String),

    #[error("compiler timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
