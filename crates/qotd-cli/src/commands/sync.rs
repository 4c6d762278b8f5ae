use std::path::Path;

use qotd_core::sync::{reconcile, RemoteClient};

use crate::commands::common::{open_store, require_endpoint};
use crate::error::CliError;

pub async fn run_sync(data_dir: &Path, endpoint: Option<&str>) -> Result<(), CliError> {
    let endpoint = require_endpoint(endpoint)?;
    let client = RemoteClient::new(endpoint)?;

    let mut store = open_store(data_dir);
    let report = reconcile(&client, &mut store).await?;

    println!(
        "Fetched {} quotes; {} new ({} total)",
        report.fetched,
        report.merged,
        store.quotes().len()
    );

    Ok(())
}
