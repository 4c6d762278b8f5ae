use std::env;
use std::path::{Path, PathBuf};

use qotd_core::storage::FileKvStore;
use qotd_core::{Quote, QuoteStore};
use serde::Serialize;

use crate::error::CliError;

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "QOTD_DATA_DIR";

/// Environment variable naming the remote feed URL
pub const SYNC_URL_ENV: &str = "QOTD_SYNC_URL";

#[derive(Debug, Serialize)]
pub struct QuoteListItem {
    pub text: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Pick the data directory: flag beats environment beats platform default
pub fn resolve_data_dir(cli_data_dir: Option<PathBuf>) -> PathBuf {
    pick_data_dir(cli_data_dir, env::var_os(DATA_DIR_ENV).map(PathBuf::from))
}

pub fn pick_data_dir(flag: Option<PathBuf>, env_value: Option<PathBuf>) -> PathBuf {
    flag.or(env_value).unwrap_or_else(default_data_dir)
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| panic!("Failed to resolve CLI data directory"))
        .join("qotd")
}

/// Pick the sync endpoint: flag beats environment; blank values count as
/// unset
pub fn resolve_endpoint(cli_endpoint: Option<String>) -> Option<String> {
    pick_endpoint(cli_endpoint, env::var(SYNC_URL_ENV).ok())
}

pub fn pick_endpoint(flag: Option<String>, env_value: Option<String>) -> Option<String> {
    normalize_text_option(flag).or_else(|| normalize_text_option(env_value))
}

pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

pub fn require_endpoint(endpoint: Option<&str>) -> Result<&str, CliError> {
    endpoint.ok_or(CliError::SyncNotConfigured)
}

/// Open the quote store backing the given data directory
pub fn open_store(data_dir: &Path) -> QuoteStore<FileKvStore> {
    QuoteStore::load(FileKvStore::new(data_dir))
}

pub fn quote_to_list_item(quote: &Quote) -> QuoteListItem {
    QuoteListItem {
        text: quote.text.clone(),
        category: quote.category.clone(),
        id: quote.id.as_ref().map(ToString::to_string),
    }
}

pub fn format_quote_lines<'a, I>(quotes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Quote>,
{
    quotes
        .into_iter()
        .map(|quote| {
            let preview = quote_preview(quote, 60);
            format!("{:<12}  {preview}", quote.category)
        })
        .collect()
}

pub fn quote_preview(quote: &Quote, max_chars: usize) -> String {
    let collapsed = quote.text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}
