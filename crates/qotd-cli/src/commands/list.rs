use std::path::Path;

use qotd_core::{CategoryFilter, Quote};

use crate::commands::common::{format_quote_lines, open_store, quote_to_list_item, QuoteListItem};
use crate::error::CliError;

pub fn run_list(category: Option<&str>, as_json: bool, data_dir: &Path) -> Result<(), CliError> {
    let store = open_store(data_dir);
    // The list is the full inventory; the saved filter only affects `show`
    let filter = category.map_or(CategoryFilter::All, CategoryFilter::from);

    let quotes: Vec<&Quote> = store
        .quotes()
        .iter()
        .filter(|quote| filter.matches(quote))
        .collect();

    if as_json {
        let json_items = quotes
            .iter()
            .map(|quote| quote_to_list_item(quote))
            .collect::<Vec<QuoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if quotes.is_empty() {
        println!("No quotes available.");
    } else {
        for line in format_quote_lines(quotes) {
            println!("{line}");
        }
    }

    Ok(())
}
