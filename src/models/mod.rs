//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the expense
//! domain: money amounts, categories, and expense records.

pub mod category;
pub mod expense;
pub mod money;

pub use category::{CategoryResolution, CategorySet};
pub use expense::ExpenseRecord;
pub use money::{Money, MoneyParseError};
