use std::path::Path;
use std::time::Duration;

use qotd_core::scheduler::{ReconcileTask, Scheduler};
use qotd_core::sync::RemoteClient;
use tokio::sync::watch;

use crate::commands::common::{open_store, require_endpoint};
use crate::error::CliError;

pub async fn run_watch(
    interval_secs: u64,
    data_dir: &Path,
    endpoint: Option<&str>,
) -> Result<(), CliError> {
    if interval_secs == 0 {
        return Err(CliError::InvalidInterval);
    }
    let endpoint = require_endpoint(endpoint)?;
    let client = RemoteClient::new(endpoint)?;
    let mut store = open_store(data_dir);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    println!(
        "Syncing from {} every {interval_secs}s; press Ctrl-C to stop.",
        client.endpoint()
    );

    let scheduler = Scheduler::new(Duration::from_secs(interval_secs));
    let mut task = ReconcileTask::new(&client, &mut store);
    scheduler.run(&mut task, shutdown_rx).await;

    println!("Stopped. Collection holds {} quotes.", store.quotes().len());

    Ok(())
}
