use std::path::Path;

use qotd_core::sync::RemoteClient;

use crate::commands::common::open_store;
use crate::error::CliError;

pub async fn run_add(
    text: &str,
    category: &str,
    data_dir: &Path,
    endpoint: Option<&str>,
) -> Result<(), CliError> {
    let mut store = open_store(data_dir);
    let quote = store.add(text, category)?;
    println!(
        "Added quote to '{}' ({} total)",
        quote.category,
        store.quotes().len()
    );

    // The local capture already succeeded; posting to the feed is
    // best-effort and only a misconfigured endpoint fails the command.
    let Some(endpoint) = endpoint else {
        return Ok(());
    };
    let client = RemoteClient::new(endpoint)?;

    match client.post_quote(&quote).await {
        Ok(id) => {
            store.backfill_id(&quote.text, id.clone())?;
            tracing::info!("Posted quote to server as id {id}");
        }
        Err(error) => {
            tracing::warn!("Quote saved locally but posting to server failed: {error}");
        }
    }

    Ok(())
}
