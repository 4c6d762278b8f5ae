//! Qotd CLI - a quote collection that lives in a local data directory
//!
//! Capture quotes from the terminal, pull more from a remote feed, and get
//! one back at random when you need it.

mod cli;
mod commands;
mod error;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::common::{resolve_data_dir, resolve_endpoint};
use crate::commands::completions::run_completions;
use crate::commands::export::run_export;
use crate::commands::filter::run_filter;
use crate::commands::import::run_import;
use crate::commands::list::run_list;
use crate::commands::show::run_show;
use crate::commands::sync::run_sync;
use crate::commands::watch::run_watch;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("qotd=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir);
    let endpoint = resolve_endpoint(cli.endpoint);

    match cli.command {
        Some(Commands::Show { category }) => run_show(category.as_deref(), &data_dir)?,
        Some(Commands::Add { text, category }) => {
            run_add(&text, &category, &data_dir, endpoint.as_deref()).await?;
        }
        Some(Commands::List { category, json }) => {
            run_list(category.as_deref(), json, &data_dir)?;
        }
        Some(Commands::Filter { category }) => run_filter(category.as_deref(), &data_dir)?,
        Some(Commands::Export { output }) => run_export(output.as_deref(), &data_dir)?,
        Some(Commands::Import { path }) => run_import(&path, &data_dir)?,
        Some(Commands::Sync) => run_sync(&data_dir, endpoint.as_deref()).await?,
        Some(Commands::Watch { interval_secs }) => {
            run_watch(interval_secs, &data_dir, endpoint.as_deref()).await?;
        }
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        // Bare `qotd` is the quote of the day
        None => run_show(None, &data_dir)?,
    }

    Ok(())
}
