use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_tracker::cli::Session;
use expense_tracker::clock::SystemClock;
use expense_tracker::config::TrackerConfig;
use expense_tracker::logging::{setup_logging, DEFAULT_LOG_LEVEL};
use expense_tracker::storage::RecordStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Log expenses and view monthly spending by category",
    long_about = "Expense Tracker records expenses (amount, description, category) \
                  to a local JSON file and summarizes spending by month and \
                  category through a numbered menu."
)]
struct Cli {
    /// Path of the expense data file [default: expenses.json]
    #[arg(long, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// JSON config file with categories and display settings
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter for diagnostics on stderr (error, warn, info, debug, trace)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli.log_level)?;
    tracing::info!("Expense Tracker v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => match TrackerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return Ok(());
            }
        },
        None => TrackerConfig::default(),
    };
    let config = match cli.data_file {
        Some(path) => config.with_data_file(path),
        None => config,
    };

    let store = match RecordStore::open(&config.data_file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!(
                "Failed to load expenses from {}: {}",
                config.data_file.display(),
                e
            );
            return Ok(());
        }
    };

    let stdin = io::stdin();
    let mut session = Session::new(&config, store, SystemClock, stdin.lock(), io::stdout());

    if let Err(e) = session.run() {
        tracing::error!(error = %e, "session ended early");
        eprintln!("{}", e);
    }

    Ok(())
}
