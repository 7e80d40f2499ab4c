// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Negative lexer fixture generation.
//!
//! Each catalog token becomes `lex_test{N}.kt` holding a comment line and
//! the raw token. Output is deterministic, so regenerating over an existing
//! directory rewrites identical bytes.

use crate::catalog::first_duplicate;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory fixtures are written to when nothing else is configured.
pub const DEFAULT_FIXTURE_DIR: &str = "lex_tests";

/// First line of every fixture.
pub const FIXTURE_HEADER: &str = "// This file contains an illegal token";

/// A fixture written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    /// 1-based position of the token in its catalog
    pub index: usize,
    pub token: String,
    pub path: PathBuf,
}

/// File name for the fixture at a 1-based catalog position.
pub fn fixture_file_name(index: usize) -> String {
    format!("lex_test{}.kt", index)
}

/// Full text of the fixture for `token`.
pub fn fixture_contents(token: &str) -> String {
    format!("{}\n{}\n", FIXTURE_HEADER, token)
}

/// Write one fixture per token into `out_dir`, creating it as needed.
///
/// Rejects catalogs with duplicate tokens before touching the filesystem.
pub fn generate<S: AsRef<str>>(tokens: &[S], out_dir: &Path) -> Result<Vec<Fixture>, FixtureError> {
    if let Some(token) = first_duplicate(tokens) {
        return Err(FixtureError::DuplicateToken(token.to_string()));
    }

    std::fs::create_dir_all(out_dir).map_err(|source| FixtureError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut fixtures = Vec::with_capacity(tokens.len());
    for (offset, token) in tokens.iter().enumerate() {
        let index = offset + 1;
        let token = token.as_ref();
        let path = out_dir.join(fixture_file_name(index));
        std::fs::write(&path, fixture_contents(token)).map_err(|source| FixtureError::Write {
            path: path.clone(),
            source,
        })?;
        fixtures.push(Fixture {
            index,
            token: token.to_string(),
            path,
        });
    }

    Ok(fixtures)
}

/// Load a catalog file: one token per line, blank lines ignored.
pub fn load_catalog(path: &Path) -> Result<Vec<String>, FixtureError> {
    let content = std::fs::read_to_string(path).map_err(|source| FixtureError::ReadCatalog {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Summary line reported after a successful generation.
pub fn describe(count: usize, out_dir: &Path) -> String {
    format!("{} test files created in '{}'", count, out_dir.display())
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to create fixture directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write fixture {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Token {0:?} appears more than once in the catalog")]
    DuplicateToken(String),

    #[error("Failed to read token catalog {}: {source}", path.display())]
    ReadCatalog {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
#[path = "fixtures_tests.rs"]
mod tests;
