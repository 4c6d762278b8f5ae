//! Persistence layer for Qotd
//!
//! Snapshots go through a small key/value byte contract, so the quote store
//! does not care whether bytes land on disk or stay in memory.

mod fs;
mod memory;

pub use fs::FileKvStore;
pub use memory::MemoryKvStore;

use crate::error::Result;
use crate::models::{CategoryFilter, Quote};

/// Storage key for the serialized quote collection
pub const QUOTES_KEY: &str = "quotes";

/// Storage key for the persisted category filter
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";

/// Abstract interface for key/value byte storage.
/// Designed to be agnostic of the underlying mechanism (file, memory).
pub trait KvStore {
    /// Read the value stored under `key`, or `None` if the key is absent
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;
}

/// Serialize the quote collection and write it under [`QUOTES_KEY`]
pub fn save_collection<S: KvStore>(storage: &mut S, quotes: &[Quote]) -> Result<()> {
    let json = serde_json::to_string_pretty(quotes)?;
    storage.set(QUOTES_KEY, json.as_bytes())
}

/// Read the quote collection, or `None` if no snapshot has been written yet.
///
/// Bytes that are present but not valid JSON come back as a parse error, so
/// the caller can tell an empty store apart from a corrupted one.
pub fn load_collection<S: KvStore>(storage: &S) -> Result<Option<Vec<Quote>>> {
    let Some(bytes) = storage.get(QUOTES_KEY)? else {
        return Ok(None);
    };
    let json = String::from_utf8(bytes)?;
    let quotes = serde_json::from_str(&json)?;
    Ok(Some(quotes))
}

/// Persist the category filter under [`SELECTED_CATEGORY_KEY`].
///
/// The filter is stored as its plain string form, not JSON.
pub fn save_selected_category<S: KvStore>(storage: &mut S, filter: &CategoryFilter) -> Result<()> {
    storage.set(SELECTED_CATEGORY_KEY, filter.as_str().as_bytes())
}

/// Read the persisted category filter, or `None` if one was never saved
pub fn load_selected_category<S: KvStore>(storage: &S) -> Result<Option<CategoryFilter>> {
    let Some(bytes) = storage.get(SELECTED_CATEGORY_KEY)? else {
        return Ok(None);
    };
    let raw = String::from_utf8(bytes)?;
    Ok(Some(CategoryFilter::from(raw)))
}
