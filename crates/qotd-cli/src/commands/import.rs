use std::path::Path;

use qotd_core::export::parse_import;

use crate::commands::common::open_store;
use crate::error::CliError;

pub fn run_import(path: &Path, data_dir: &Path) -> Result<(), CliError> {
    let payload = std::fs::read_to_string(path)?;
    // The whole file is validated before the store is touched, so a bad
    // entry cannot leave a half-applied import behind
    let incoming = parse_import(&payload)?;

    let mut store = open_store(data_dir);
    let report = store.import(incoming)?;
    println!(
        "Imported {} quotes ({} duplicates skipped)",
        report.added, report.skipped
    );

    Ok(())
}
