//! Address book - Main entry point
//!
//! Interactive command-line contact manager. Contacts are loaded from the
//! configured snapshot file at start and saved back on exit.

use address_book::repositories::FileDirectoryRepository;
use address_book::session::Session;
use address_book::Config;
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Initialize logging (stderr only, stdout is the user dialogue)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using address book file: {}", config.data_file.display());

    let repository = FileDirectoryRepository::new(config.data_file.clone());
    let mut session = Session::open(Box::new(repository), config.page_size)?;
    info!("Loaded {} records", session.directory().len());

    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout())?;

    info!("Address book session complete");
    Ok(())
}
