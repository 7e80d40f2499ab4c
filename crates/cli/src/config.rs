// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration.
//!
//! Layers, lowest to highest precedence: built-in defaults, a TOML config
//! file, `K0TEST_*` environment variables, then command-line flags (applied
//! by the caller).

use crate::category::{CategoryError, CategoryTable};
use crate::compiler::{DiagnosticPolicy, DEFAULT_COMPILER, DEFAULT_TIMEOUT_MS};
use crate::env;
use crate::fixtures::DEFAULT_FIXTURE_DIR;
use serde::Deserialize;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file picked up from the working directory when present.
pub const CONFIG_FILE_NAME: &str = "k0test.toml";

/// Default corpus root holding one directory per category.
pub const DEFAULT_TEST_ROOT: &str = "tests";

/// Effective harness configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Compiler executable under test
    pub compiler: PathBuf,

    /// Directory holding one sub-directory per category
    pub test_root: PathBuf,

    /// Per-invocation compiler timeout; zero is rejected
    pub timeout_ms: NonZeroU64,

    /// How compiler output is judged
    pub policy: DiagnosticPolicy,

    /// Report to this file instead of the console
    pub transcript: Option<PathBuf>,

    pub fixtures: FixtureConfig,

    /// Ordered `category → expect_error` table
    pub categories: CategoryTable,
}

/// Fixture generator settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureConfig {
    /// Where generated lexer fixtures are written
    pub dir: PathBuf,

    /// Token catalog file; the built-in catalog when unset
    pub catalog: Option<PathBuf>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_FIXTURE_DIR),
            catalog: None,
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            compiler: PathBuf::from(DEFAULT_COMPILER),
            test_root: PathBuf::from(DEFAULT_TEST_ROOT),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            policy: DiagnosticPolicy::default(),
            transcript: None,
            fixtures: FixtureConfig::default(),
            categories: CategoryTable::default(),
        }
    }
}

impl HarnessConfig {
    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    /// Resolve the config file and environment overrides.
    ///
    /// An explicit path (flag or `K0TEST_CONFIG`) must exist; otherwise
    /// `k0test.toml` in `cwd` is used if present, else the defaults.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        let explicit = explicit.map(Path::to_path_buf).or_else(env::config_path);
        let config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => {
                let local = cwd.join(CONFIG_FILE_NAME);
                if local.is_file() {
                    Self::from_file(&local)?
                } else {
                    Self::default()
                }
            }
        };
        Ok(config.with_env())
    }

    /// Apply `K0TEST_COMPILER` and `K0TEST_TIMEOUT_MS`.
    pub fn with_env(self) -> Self {
        self.with_overrides(env::compiler(), env::timeout_ms())
    }

    fn with_overrides(
        mut self,
        compiler: Option<PathBuf>,
        timeout_ms: Option<NonZeroU64>,
    ) -> Self {
        if let Some(compiler) = compiler {
            self.compiler = compiler;
        }
        if let Some(timeout_ms) = timeout_ms {
            self.timeout_ms = timeout_ms;
        }
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },

    #[error(transparent)]
    Category(#[from] CategoryError),
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
