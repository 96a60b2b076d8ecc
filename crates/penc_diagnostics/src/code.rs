//! Diagnostic codes with category prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Failed checks, prefixed with `E`.
    Error,
    /// Observations that do not fail a run, prefixed with `W`.
    Warning,
    /// Informational records, prefixed with `N`.
    Note,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
            Category::Note => 'N',
        }
    }
}

/// A category prefix plus a number, displayed as e.g. `E001`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// A resolved output differs from the expected value.
    pub const MISMATCH: Self = Self::new(Category::Error, 1);
    /// The output was unresolved where a value was expected.
    pub const UNEXPECTED_UNRESOLVED: Self = Self::new(Category::Error, 2);
    /// The output resolved where an unresolved output was expected.
    pub const EXPECTED_UNRESOLVED: Self = Self::new(Category::Error, 3);
    /// An unresolvable output was observed.
    pub const UNRESOLVABLE_OUTPUT: Self = Self::new(Category::Warning, 1);
    /// A vector passed.
    pub const VECTOR_PASSED: Self = Self::new(Category::Note, 1);

    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}
