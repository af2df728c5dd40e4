//! Expense Tracker - personal expense log for the terminal
//!
//! This library provides the core functionality for the `expense` binary:
//! recording expenses to a local JSON file and summarizing spending by month
//! and category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file location, category set, and display settings
//! - `error`: Custom error types
//! - `clock`: Date source used to stamp new records
//! - `models`: Core data models (money, categories, expense records)
//! - `storage`: JSON file storage layer
//! - `services`: Expense entry and validation
//! - `reports`: Monthly summaries
//! - `display`: Text rendering of reports
//! - `cli`: Interactive menu session
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::TrackerConfig;
//! use expense_tracker::reports::summarize;
//! use expense_tracker::storage::RecordStore;
//!
//! let config = TrackerConfig::default();
//! let store = RecordStore::open(&config.data_file)?;
//! let summary = summarize(store.records());
//! print!("{}", expense_tracker::display::render(&summary, &config.currency_symbol));
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
