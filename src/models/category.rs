//! Expense categories
//!
//! Categories come from a fixed, configured list. Input that matches none of
//! them falls back to a default category instead of being rejected.

use std::fmt;

/// The outcome of matching user input against the category set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryResolution {
    /// The category the record will carry
    pub category: String,

    /// True when the input was not recognized and the fallback was used
    pub coerced: bool,
}

/// An ordered set of allowed categories with a fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    names: Vec<String>,
    fallback: String,
}

impl CategorySet {
    /// Create a category set
    pub fn new(names: Vec<String>, fallback: impl Into<String>) -> Self {
        Self {
            names,
            fallback: fallback.into(),
        }
    }

    /// All allowed category names, in display order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The category used for unrecognized input
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Check whether a name is one of the allowed categories (case-sensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Match input against the set, falling back when it is not recognized
    pub fn resolve(&self, input: &str) -> CategoryResolution {
        let input = input.trim();
        if self.contains(input) {
            CategoryResolution {
                category: input.to_string(),
                coerced: false,
            }
        } else {
            CategoryResolution {
                category: self.fallback.clone(),
                coerced: true,
            }
        }
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}
