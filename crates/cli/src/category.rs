// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test categories and what each one expects from the compiler.

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// A directory of test inputs sharing one expectation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub name: String,
    /// Whether every file in this category should be rejected
    pub expect_error: bool,
}

impl Category {
    pub fn new(name: impl Into<String>, expect_error: bool) -> Self {
        Self {
            name: name.into(),
            expect_error,
        }
    }
}

/// Ordered `category → expect_error` table.
///
/// Never empty and never holds two categories with the same name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Category>")]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    pub fn new(categories: Vec<Category>) -> Result<Self, CategoryError> {
        if categories.is_empty() {
            return Err(CategoryError::Empty);
        }
        let mut seen = HashSet::new();
        if let Some(dup) = categories.iter().find(|c| !seen.insert(c.name.as_str())) {
            return Err(CategoryError::Duplicate(dup.name.clone()));
        }
        Ok(Self { categories })
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Narrow the table to `names`, keeping declared order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Self, CategoryError> {
        if let Some(unknown) = names.iter().find(|n| self.get(n.as_ref()).is_none()) {
            return Err(CategoryError::Unknown(unknown.as_ref().to_string()));
        }
        let selected = self
            .categories
            .iter()
            .filter(|c| names.iter().any(|n| n.as_ref() == c.name))
            .cloned()
            .collect();
        Self::new(selected)
    }
}

impl Default for CategoryTable {
    /// `errors` and `kotlin` must be rejected; `k0` is the accepted subset.
    fn default() -> Self {
        Self {
            categories: vec![
                Category::new("errors", true),
                Category::new("k0", false),
                Category::new("kotlin", true),
            ],
        }
    }
}

impl TryFrom<Vec<Category>> for CategoryTable {
    type Error = CategoryError;

    fn try_from(categories: Vec<Category>) -> Result<Self, Self::Error> {
        Self::new(categories)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryError {
    #[error("At least one test category must be declared")]
    Empty,

    #[error("Test category '{0}' is declared more than once")]
    Duplicate(String),

    #[error("Unknown test category '{0}'")]
    Unknown(String),
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
