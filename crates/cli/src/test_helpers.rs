// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Compiler stubs and corpus builders shared by unit tests.

use std::path::{Path, PathBuf};

/// Stub that rejects every input.
pub const REJECT_ALL: &str = "echo \"error: illegal token in $1\" >&2";

/// Stub that accepts every input and prints a line on stdout.
pub const ACCEPT_ALL: &str = "echo \"compiled $1\"";

/// Stub that rejects files containing the word `bad`.
pub const REJECT_BAD: &str = "if grep -q bad \"$1\"; then echo \"rejected $1\" >&2; fi";

/// Stub that never finishes on its own.
pub const HANG: &str = "exec sleep 30";

/// Write an executable shell script named `name` into `dir`.
#[cfg(unix)]
pub fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Create `root/category` holding the given `(file name, contents)` pairs.
pub fn write_category(root: &Path, category: &str, files: &[(&str, &str)]) -> PathBuf {
    let dir = root.join(category);
    std::fs::create_dir_all(&dir).unwrap();
    for (name, contents) in files {
        std::fs::write(dir.join(name), contents).unwrap();
    }
    dir
}
