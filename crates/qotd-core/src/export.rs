//! Quote export and import helpers shared by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Quote;

/// Default file name offered for exports.
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// Serializable quote representation used by the export file format.
///
/// Server ids are not part of the file; an exported collection re-imports
/// as plain local quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportQuote {
    pub text: String,
    pub category: String,
}

/// Convert a quote into an export record.
#[must_use]
pub fn quote_to_export_item(quote: &Quote) -> ExportQuote {
    ExportQuote {
        text: quote.text.clone(),
        category: quote.category.clone(),
    }
}

/// Render the collection as pretty-printed JSON.
pub fn render_json_export(quotes: &[Quote]) -> serde_json::Result<String> {
    let items = quotes
        .iter()
        .map(quote_to_export_item)
        .collect::<Vec<ExportQuote>>();
    serde_json::to_string_pretty(&items)
}

/// Parse an import document into quotes, checking every entry before any of
/// them reaches the store.
///
/// Malformed JSON is a parse error; a structurally valid entry with blank
/// text or category is a validation error naming the entry's position. The
/// caller only mutates anything once the whole file has passed.
pub fn parse_import(payload: &str) -> Result<Vec<Quote>> {
    let items: Vec<ExportQuote> = serde_json::from_str(payload)?;

    for (index, item) in items.iter().enumerate() {
        if item.text.trim().is_empty() {
            return Err(Error::Validation(format!(
                "import entry {index} has empty text"
            )));
        }
        if item.category.trim().is_empty() {
            return Err(Error::Validation(format!(
                "import entry {index} has empty category"
            )));
        }
    }

    Ok(items
        .into_iter()
        .map(|item| Quote::new(item.text, item.category))
        .collect())
}
