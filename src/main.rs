//! Address Book - Main entry point
//!
//! Loads the address book, runs the interactive command loop on stdin and
//! saves the book when the session ends.

use address_book::cli::repl;
use address_book::repositories::{AddressBookStore, JsonFileStore};
use address_book::{CommandDispatcher, Config};
use anyhow::Result;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Logging goes to stderr so replies on stdout stay clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
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

    let store = JsonFileStore::new(&config.book_path);
    info!("Using address book file {}", store.path().display());

    let book = store.load_or_default();
    let dispatcher = CommandDispatcher::new(book, &config);

    let stdin = BufReader::new(tokio::io::stdin());
    let (book, session) = repl::run(dispatcher, stdin, tokio::io::stdout()).await;

    // Save even when the session ended on an I/O error.
    if let Err(e) = store.save(&book) {
        error!("Failed to save address book: {}", e);
        return Err(e.into());
    }

    info!("Saved {} records, session complete", book.len());
    session?;
    Ok(())
}
