use std::path::Path;

use qotd_core::CategoryFilter;

use crate::commands::common::open_store;
use crate::error::CliError;

pub fn run_filter(category: Option<&str>, data_dir: &Path) -> Result<(), CliError> {
    let mut store = open_store(data_dir);

    if let Some(raw) = category {
        let filter = CategoryFilter::from(raw);
        store.set_category(filter.clone())?;
        if filter.is_all() {
            println!("Filter cleared; showing all categories.");
        } else {
            println!("Filter set to '{filter}'.");
        }
        return Ok(());
    }

    println!("Current filter: {}", store.selected());

    let categories = store.categories();
    if !categories.is_empty() {
        println!();
        println!("Categories:");
        for (name, count) in categories {
            println!("  {name:<12}  {count}");
        }
    }

    Ok(())
}
