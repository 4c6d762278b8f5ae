//! The quote store
//!
//! Owns the quote collection and the selected category filter, and writes a
//! snapshot through its storage after every mutation. Callers hold one store
//! per data directory and route all reads and writes through it.

use crate::error::{Error, Result};
use crate::models::{seed_quotes, CategoryFilter, Quote, QuoteId};
use crate::storage::{self, KvStore};
use std::collections::BTreeMap;

/// Outcome of an import, reported back to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Entries appended to the collection
    pub added: usize,
    /// Entries skipped because their text was already present
    pub skipped: usize,
}

/// A quote collection bound to a storage backend
pub struct QuoteStore<S: KvStore> {
    quotes: Vec<Quote>,
    selected: CategoryFilter,
    storage: S,
}

impl<S: KvStore> QuoteStore<S> {
    /// Open a store from whatever snapshot the storage holds.
    ///
    /// A missing collection key seeds the starter quotes; a missing filter
    /// key defaults to "all". Unreadable values are logged and replaced with
    /// the same defaults rather than failing the whole session. A snapshot
    /// holding an empty array is respected as-is.
    pub fn load(storage: S) -> Self {
        let quotes = match storage::load_collection(&storage) {
            Ok(Some(quotes)) => quotes,
            Ok(None) => seed_quotes(),
            Err(err) => {
                tracing::warn!("ignoring unreadable quote snapshot: {err}");
                seed_quotes()
            }
        };
        let selected = match storage::load_selected_category(&storage) {
            Ok(Some(filter)) => filter,
            Ok(None) => CategoryFilter::All,
            Err(err) => {
                tracing::warn!("ignoring unreadable category filter: {err}");
                CategoryFilter::All
            }
        };
        Self {
            quotes,
            selected,
            storage,
        }
    }

    /// The full collection, in insertion order
    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// The currently selected category filter
    #[must_use]
    pub const fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    /// Append a new quote and persist the collection.
    ///
    /// Both fields must contain something other than whitespace; the text is
    /// stored exactly as given. Returns the stored quote.
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote> {
        if text.trim().is_empty() {
            return Err(Error::Validation("quote text must not be empty".into()));
        }
        if category.trim().is_empty() {
            return Err(Error::Validation("category must not be empty".into()));
        }

        let quote = Quote::new(text, category);
        self.quotes.push(quote.clone());
        self.persist_collection()?;
        Ok(quote)
    }

    /// The quotes passing the selected filter, in insertion order.
    ///
    /// Recomputed on every call; the collection stays small enough that
    /// caching would buy nothing.
    pub fn filtered(&self) -> impl Iterator<Item = &Quote> + '_ {
        self.quotes
            .iter()
            .filter(move |quote| self.selected.matches(quote))
    }

    /// Replace the selected filter and persist that value alone
    pub fn set_category(&mut self, filter: CategoryFilter) -> Result<()> {
        self.selected = filter;
        storage::save_selected_category(&mut self.storage, &self.selected)
    }

    /// Merge incoming quotes, keeping only those whose text is not already
    /// in the collection. Duplicates within the batch are skipped the same
    /// way. Returns how many were appended; the snapshot is written only
    /// when that count is nonzero.
    pub fn merge(&mut self, incoming: Vec<Quote>) -> Result<usize> {
        let mut added = 0;
        for quote in incoming {
            if self.quotes.iter().any(|known| known.text == quote.text) {
                continue;
            }
            self.quotes.push(quote);
            added += 1;
        }
        if added > 0 {
            self.persist_collection()?;
        }
        Ok(added)
    }

    /// Attach a server-assigned id to the most recent id-less quote with the
    /// given text. Returns whether anything matched.
    pub fn backfill_id(&mut self, text: &str, id: QuoteId) -> Result<bool> {
        let Some(quote) = self
            .quotes
            .iter_mut()
            .rev()
            .find(|quote| quote.id.is_none() && quote.text == text)
        else {
            return Ok(false);
        };
        quote.id = Some(id);
        self.persist_collection()?;
        Ok(true)
    }

    /// Category labels present in the collection with their quote counts,
    /// sorted by label
    #[must_use]
    pub fn categories(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for quote in &self.quotes {
            *counts.entry(quote.category.clone()).or_insert(0) += 1;
        }
        counts.into_iter().collect()
    }

    /// Merge a batch of already-validated imported quotes and report what
    /// happened to each entry
    pub fn import(&mut self, incoming: Vec<Quote>) -> Result<ImportReport> {
        let total = incoming.len();
        let added = self.merge(incoming)?;
        Ok(ImportReport {
            added,
            skipped: total - added,
        })
    }

    /// Tear down the store and hand back its storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist_collection(&mut self) -> Result<()> {
        storage::save_collection(&mut self.storage, &self.quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryKvStore, QUOTES_KEY, SELECTED_CATEGORY_KEY};
    use pretty_assertions::assert_eq;

    fn seeded_store() -> QuoteStore<MemoryKvStore> {
        QuoteStore::load(MemoryKvStore::new())
    }

    #[test]
    fn test_load_empty_storage_uses_seeds() {
        let store = seeded_store();
        assert_eq!(store.quotes(), seed_quotes().as_slice());
        assert_eq!(store.selected(), &CategoryFilter::All);
    }

    #[test]
    fn test_load_respects_persisted_empty_collection() {
        let mut storage = MemoryKvStore::new();
        storage::save_collection(&mut storage, &[]).unwrap();

        let store = QuoteStore::load(storage);
        assert!(store.quotes().is_empty());
    }

    #[test]
    fn test_load_falls_back_on_corrupted_snapshot() {
        let mut storage = MemoryKvStore::new();
        storage.set(QUOTES_KEY, b"{definitely not json").unwrap();
        storage.set(SELECTED_CATEGORY_KEY, b"Wisdom").unwrap();

        let store = QuoteStore::load(storage);
        assert_eq!(store.quotes(), seed_quotes().as_slice());
        // The readable key is still honored
        assert_eq!(
            store.selected(),
            &CategoryFilter::Category("Wisdom".to_string())
        );
    }

    #[test]
    fn test_add_appends_exact_fields() {
        let mut store = seeded_store();
        let before = store.quotes().len();

        let quote = store.add("  spaced out  ", "Oddities").unwrap();

        assert_eq!(store.quotes().len(), before + 1);
        assert_eq!(quote.text, "  spaced out  ");
        assert_eq!(quote.category, "Oddities");
        assert!(quote.id.is_none());
        assert_eq!(store.quotes().last(), Some(&quote));
    }

    #[test]
    fn test_add_rejects_blank_fields() {
        let mut store = seeded_store();
        let before = store.quotes().to_vec();

        for (text, category) in [("", "Cat"), ("   ", "Cat"), ("words", ""), ("words", "\t ")] {
            let err = store.add(text, category).unwrap_err();
            assert!(
                matches!(err, Error::Validation(_)),
                "({text:?}, {category:?}) gave {err}"
            );
        }

        assert_eq!(store.quotes(), before.as_slice());
    }

    #[test]
    fn test_add_persists_collection() {
        let mut store = seeded_store();
        store.add("persist me", "Cat").unwrap();

        let reloaded = QuoteStore::load(store.into_storage());
        assert_eq!(reloaded.quotes().len(), 4);
        assert_eq!(reloaded.quotes()[3].text, "persist me");
    }

    #[test]
    fn test_filtered_all_returns_everything_in_order() {
        let store = seeded_store();
        let filtered: Vec<&Quote> = store.filtered().collect();
        let all: Vec<&Quote> = store.quotes().iter().collect();
        assert_eq!(filtered, all);
    }

    #[test]
    fn test_filtered_by_category_keeps_matches_only() {
        let mut store = seeded_store();
        store.add("another wise one", "Wisdom").unwrap();
        store.set_category(CategoryFilter::from("Wisdom")).unwrap();

        let filtered: Vec<&Quote> = store.filtered().collect();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|quote| quote.category == "Wisdom"));

        let source_count = store
            .quotes()
            .iter()
            .filter(|quote| quote.category == "Wisdom")
            .count();
        assert_eq!(filtered.len(), source_count);
    }

    #[test]
    fn test_filtered_seed_motivation_is_single_quote() {
        let mut store = seeded_store();
        store
            .set_category(CategoryFilter::from("Motivation"))
            .unwrap();

        let filtered: Vec<&Quote> = store.filtered().collect();
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].text.contains("doubts of today"));
    }

    #[test]
    fn test_add_then_filter_all_scenario() {
        let mut store = seeded_store();
        store.add("X", "Cat1").unwrap();

        assert_eq!(store.quotes().len(), 4);
        assert_eq!(store.filtered().count(), 4);
    }

    #[test]
    fn test_set_category_persists_that_value_alone() {
        let mut store = seeded_store();
        store.set_category(CategoryFilter::from("Wisdom")).unwrap();

        let storage = store.into_storage();
        assert!(storage.get(SELECTED_CATEGORY_KEY).unwrap().is_some());
        // The collection itself was never written
        assert!(storage.get(QUOTES_KEY).unwrap().is_none());
    }

    #[test]
    fn test_merge_appends_novel_text_only() {
        let mut store = seeded_store();
        let existing = store.quotes()[0].text.clone();

        let added = store
            .merge(vec![
                Quote::new(existing, "Server"),
                Quote::new("fresh from the wire", "Server"),
            ])
            .unwrap();

        assert_eq!(added, 1);
        assert_eq!(store.quotes().len(), 4);
        assert_eq!(store.quotes()[3].text, "fresh from the wire");
    }

    #[test]
    fn test_merge_seed_duplicate_reports_zero() {
        let mut store = seeded_store();

        let added = store
            .merge(vec![Quote::new(
                "Great minds discuss ideas; average minds discuss events; small minds discuss people.",
                "Server",
            )])
            .unwrap();

        assert_eq!(added, 0);
        assert_eq!(store.quotes().len(), 3);
    }

    #[test]
    fn test_merge_dedups_within_batch() {
        let mut store = seeded_store();

        let added = store
            .merge(vec![
                Quote::new("echo", "Server"),
                Quote::new("echo", "Server"),
            ])
            .unwrap();

        assert_eq!(added, 1);
    }

    #[test]
    fn test_merge_zero_added_skips_persistence() {
        let mut store = seeded_store();
        let existing = store.quotes()[0].text.clone();

        store.merge(vec![Quote::new(existing, "Server")]).unwrap();

        // No mutation happened, so no snapshot was written either
        assert!(store.into_storage().get(QUOTES_KEY).unwrap().is_none());
    }

    #[test]
    fn test_round_trip_reproduces_state() {
        let mut store = seeded_store();
        store.add("round tripper", "Cat").unwrap();
        store.set_category(CategoryFilter::from("Cat")).unwrap();
        let quotes = store.quotes().to_vec();

        let reloaded = QuoteStore::load(store.into_storage());
        assert_eq!(reloaded.quotes(), quotes.as_slice());
        assert_eq!(reloaded.selected(), &CategoryFilter::from("Cat"));
    }

    #[test]
    fn test_backfill_id_targets_newest_idless_match() {
        let mut store = seeded_store();
        store.add("twice spoken", "Cat").unwrap();
        store.add("twice spoken", "Cat").unwrap();

        let found = store
            .backfill_id("twice spoken", QuoteId::from(41u64))
            .unwrap();
        assert!(found);

        // The later copy got the id, the earlier one is untouched
        assert_eq!(store.quotes()[4].id, Some(QuoteId::from(41u64)));
        assert_eq!(store.quotes()[3].id, None);
    }

    #[test]
    fn test_backfill_id_without_match() {
        let mut store = seeded_store();
        let found = store
            .backfill_id("never added", QuoteId::from(1u64))
            .unwrap();
        assert!(!found);
    }

    #[test]
    fn test_backfill_id_persists() {
        let mut store = seeded_store();
        store.add("saved", "Cat").unwrap();
        store.backfill_id("saved", QuoteId::from(9u64)).unwrap();

        let reloaded = QuoteStore::load(store.into_storage());
        assert_eq!(reloaded.quotes()[3].id, Some(QuoteId::from(9u64)));
    }

    #[test]
    fn test_categories_sorted_with_counts() {
        let mut store = seeded_store();
        store.add("one more", "Action").unwrap();

        assert_eq!(
            store.categories(),
            vec![
                ("Action".to_string(), 2),
                ("Motivation".to_string(), 1),
                ("Wisdom".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_import_reports_added_and_skipped() {
        let mut store = seeded_store();
        let existing = store.quotes()[0].text.clone();

        let report = store
            .import(vec![
                Quote::new(existing, "Motivation"),
                Quote::new("brand new", "Cat"),
                Quote::new("also new", "Cat"),
            ])
            .unwrap();

        assert_eq!(report, ImportReport { added: 2, skipped: 1 });
        assert_eq!(store.quotes().len(), 5);
    }
}
