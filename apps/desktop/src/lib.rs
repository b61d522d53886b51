//! Vocabulary store and engine host.
//!
//! Owns the SQLite store, the import pipeline and the command layer used by
//! the presentation layer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod import;
pub mod logging;
pub mod state;

use anyhow::Context;

use cli::Cli;
use commands::{get_overview, import_file};
use config::Config;
use db::SqliteRepository;
use state::AppState;

/// Open (creating and migrating if needed) the store described by `config`.
///
/// Schema failures are fatal and returned to the caller.
pub fn open_state(config: &Config) -> anyhow::Result<AppState> {
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let repository = SqliteRepository::open(&config.db_path)
        .with_context(|| format!("failed to open database {}", config.db_path.display()))?;
    Ok(AppState::new(repository, config.batch_size))
}

/// Boot the engine, import the files named on the command line and print the
/// resulting overview as JSON.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.apply(Config::from_env());
    logging::init(&config.log_filter);

    let state = open_state(&config)?;

    for path in &cli.files {
        match import_file(path.to_string_lossy().into_owned(), &state).await {
            Ok(report) => println!("{}", serde_json::to_string_pretty(&report)?),
            Err(e) => tracing::error!(path = %path.display(), "{}", e.message),
        }
    }

    let overview = get_overview(&state).await?;
    println!("{}", serde_json::to_string_pretty(&overview)?);
    Ok(())
}
