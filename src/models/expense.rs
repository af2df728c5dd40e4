//! Expense record model
//!
//! A single logged expense. Records are immutable once created and are only
//! ever appended to the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// One logged expense
///
/// Serializes to `{"amount": 12.5, "description": "...", "category": "Food",
/// "date": "2024-01-05"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Amount spent, always positive for records created through entry
    pub amount: Money,

    /// Free-text description
    pub description: String,

    /// Category name from the configured category set
    pub category: String,

    /// Calendar day the record was created
    pub date: NaiveDate,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category: category.into(),
            date,
        }
    }

    /// The `YYYY-MM` bucket this record is summarized under
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date, self.amount, self.category, self.description
        )
    }
}
