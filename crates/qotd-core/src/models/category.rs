//! Category filter model

use crate::models::Quote;
use std::fmt;

/// The sentinel category value meaning "no filter"
pub const ALL_CATEGORIES: &str = "all";

/// A category filter applied to the quote collection.
///
/// Matching is exact and case-sensitive; "Motivation" and "motivation" are
/// different categories. Only the literal string `all` is the no-filter
/// sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Match every quote
    All,
    /// Match quotes whose category equals this label exactly
    Category(String),
}

impl CategoryFilter {
    /// Whether this filter lets the given quote through
    #[must_use]
    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => quote.category == *category,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The persisted string form of this filter
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(category) => category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(value)
        }
    }
}
