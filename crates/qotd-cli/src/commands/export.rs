use std::path::Path;

use qotd_core::export::{render_json_export, EXPORT_FILE_NAME};

use crate::commands::common::open_store;
use crate::error::CliError;

pub fn run_export(output_path: Option<&Path>, data_dir: &Path) -> Result<(), CliError> {
    let store = open_store(data_dir);
    let rendered = render_json_export(store.quotes())?;

    let path = output_path.unwrap_or_else(|| Path::new(EXPORT_FILE_NAME));
    std::fs::write(path, rendered)?;
    println!("{}", path.display());

    Ok(())
}
