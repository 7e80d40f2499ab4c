// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for k0test binary tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Compiler stub that reports every input on stderr.
pub const REJECT_ALL: &str = "echo \"lexical error in $1\" >&2";

/// Compiler stub that accepts every input.
pub const ACCEPT_ALL: &str = "echo \"ok $1\"";

/// A scratch project: compiler stub plus a `tests/` corpus root.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn test_root(&self) -> PathBuf {
        self.path().join("tests")
    }

    /// Write an executable compiler stub and return its path.
    #[cfg(unix)]
    pub fn stub(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Add files to `tests/<category>`.
    pub fn category(&self, name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = self.test_root().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        for (file, contents) in files {
            std::fs::write(dir.join(file), contents).unwrap();
        }
        dir
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap()
    }
}
