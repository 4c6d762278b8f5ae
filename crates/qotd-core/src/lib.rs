//! qotd-core - Core library for Qotd
//!
//! This crate contains the quote model, the persistent store, the remote
//! sync client, and the periodic scheduler used by the Qotd CLI.

pub mod error;
pub mod export;
pub mod models;
pub mod scheduler;
pub mod storage;
pub mod store;
pub mod sync;

pub use error::{Error, Result};
pub use models::{CategoryFilter, Quote, QuoteId};
pub use store::QuoteStore;
