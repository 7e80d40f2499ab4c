// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tokens the k0 subset reserves or forbids.
//!
//! Order matters: a token's position (1-based) becomes its fixture number.

use std::collections::HashSet;

/// Keywords, soft keywords and operators that k0's lexer must reject.
pub const ILLEGAL_TOKENS: &[&str] = &[
    // hard keywords
    "as", "as?", "class", "!in", "is", "!is", "object", "package",
    "super", "this", "throw", "try", "typealias", "typeof",
    // soft and modifier keywords
    "by", "catch", "constructor", "delegate", "dynamic", "field",
    "file", "finally", "get", "init", "param", "property", "receiver",
    "set", "setparam", "value", "where",
    // operators and punctuation
    "...", "*=", "/=", "%=", "->", "=>", "::", ";;", "@", "'", "~",
    "&=", "|=", "|", "^=", "^", ">>=", ">>", "<<=", "<<", "&",
];

/// Owned copy of the built-in catalog.
pub fn illegal_tokens() -> Vec<String> {
    ILLEGAL_TOKENS.iter().map(|t| t.to_string()).collect()
}

/// First token that appears more than once, if any.
pub fn first_duplicate<S: AsRef<str>>(tokens: &[S]) -> Option<&str> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .map(AsRef::as_ref)
        .find(|token| !seen.insert(*token))
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
