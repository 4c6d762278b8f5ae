//! Quote model

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier assigned by a sync server.
///
/// Servers disagree on the shape of their ids (some send numbers, some send
/// strings), so the wire form is accepted either way and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawQuoteId", into = "String")]
pub struct QuoteId(String);

/// Wire form of a quote id, before normalization
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuoteId {
    Number(serde_json::Number),
    Text(String),
}

impl QuoteId {
    /// Create an id from its text representation
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawQuoteId> for QuoteId {
    fn from(raw: RawQuoteId) -> Self {
        match raw {
            RawQuoteId::Number(n) => Self(n.to_string()),
            RawQuoteId::Text(s) => Self(s),
        }
    }
}

impl From<QuoteId> for String {
    fn from(id: QuoteId) -> Self {
        id.0
    }
}

impl From<&str> for QuoteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for QuoteId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quote in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote text, stored exactly as entered
    pub text: String,
    /// Free-form category label
    pub category: String,
    /// Server-assigned id, absent until the quote has been posted or fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuoteId>,
}

impl Quote {
    /// Create a new local quote with no server id
    #[must_use]
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            id: None,
        }
    }

    /// Attach a server-assigned id
    #[must_use]
    pub fn with_id(mut self, id: impl Into<QuoteId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// The starter collection used when no snapshot exists yet
#[must_use]
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The only limit to our realization of tomorrow is our doubts of today.",
            "Motivation",
        ),
        Quote::new(
            "Do not wait to strike till the iron is hot; but make it hot by striking.",
            "Action",
        ),
        Quote::new(
            "Great minds discuss ideas; average minds discuss events; small minds discuss people.",
            "Wisdom",
        ),
    ]
}
