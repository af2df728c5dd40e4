//! Reports module
//!
//! Derived views over the expense records. Reports are recomputed on demand
//! and never persisted.

pub mod summary;

pub use summary::{summarize, CategoryTotal, MonthSummary, Summary};
