//! Data models for Qotd

mod category;
mod quote;

pub use category::CategoryFilter;
pub use quote::{seed_quotes, Quote, QuoteId};
