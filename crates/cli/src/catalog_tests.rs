// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn builtin_catalog_has_no_duplicates() {
    assert_eq!(first_duplicate(ILLEGAL_TOKENS), None);
}

#[test]
fn builtin_catalog_size() {
    assert_eq!(ILLEGAL_TOKENS.len(), 52);
    assert_eq!(illegal_tokens().len(), ILLEGAL_TOKENS.len());
}

#[test]
fn builtin_catalog_order_is_stable() {
    assert_eq!(ILLEGAL_TOKENS.first(), Some(&"as"));
    assert_eq!(ILLEGAL_TOKENS.get(1), Some(&"as?"));
    assert_eq!(ILLEGAL_TOKENS.last(), Some(&"&"));
}

#[test]
fn builtin_catalog_tokens_are_single_line() {
    for token in ILLEGAL_TOKENS {
        assert!(!token.is_empty());
        assert!(!token.contains('\n'), "token {:?} spans lines", token);
        assert_eq!(token.trim(), *token);
    }
}

#[parameterized(
    empty = { &[], None },
    unique = { &["as", "is", "super"], None },
    adjacent = { &["as", "as", "is"], Some("as") },
    distant = { &["as", "is", "super", "is"], Some("is") },
    first_repeat_wins = { &["a", "b", "b", "a"], Some("b") },
)]
fn duplicates_are_found(tokens: &[&str], expected: Option<&str>) {
    assert_eq!(first_duplicate(tokens), expected);
}
