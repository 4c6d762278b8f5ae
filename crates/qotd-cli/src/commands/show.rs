use std::path::Path;

use qotd_core::{CategoryFilter, Quote};
use rand::seq::SliceRandom;

use crate::commands::common::open_store;
use crate::error::CliError;

pub fn run_show(category: Option<&str>, data_dir: &Path) -> Result<(), CliError> {
    let store = open_store(data_dir);
    let filter = category.map_or_else(|| store.selected().clone(), CategoryFilter::from);

    let candidates: Vec<&Quote> = store
        .quotes()
        .iter()
        .filter(|quote| filter.matches(quote))
        .collect();

    match candidates.choose(&mut rand::thread_rng()) {
        Some(quote) => {
            println!("{}", quote.text);
            println!("  - {}", quote.category);
        }
        None if filter.is_all() => println!("No quotes available."),
        None => println!("No quotes available in category '{filter}'."),
    }

    Ok(())
}
