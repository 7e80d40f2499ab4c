// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by k0test are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::num::NonZeroU64;
use std::path::PathBuf;

/// `K0TEST_CONFIG` — Harness config file, used when `--config` is absent.
pub fn config_path() -> Option<PathBuf> {
    var_path(names::K0TEST_CONFIG)
}

/// `K0TEST_COMPILER` — Compiler executable under test.
pub fn compiler() -> Option<PathBuf> {
    var_path(names::K0TEST_COMPILER)
}

/// `K0TEST_TIMEOUT_MS` — Per-invocation compiler timeout. Zero is ignored.
pub fn timeout_ms() -> Option<NonZeroU64> {
    std::env::var(names::K0TEST_TIMEOUT_MS)
        .ok()
        .and_then(|v| parse_timeout(&v))
}

fn var_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

fn parse_timeout(value: &str) -> Option<NonZeroU64> {
    value.trim().parse().ok()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
