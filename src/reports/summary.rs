//! Monthly spending summary
//!
//! Groups records by month and then by category, keeping running sums.
//! Months and categories are listed in the order they are first seen, not
//! sorted.

use tracing::debug;

use crate::models::{ExpenseRecord, Money};

/// Spending in one category within a month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of the category's records in the month
    pub subtotal: Money,
}

/// Spending for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary {
    /// Month key (`YYYY-MM`)
    pub month: String,
    /// Sum of every record in the month
    pub total: Money,
    /// Per-category subtotals in first-occurrence order
    pub categories: Vec<CategoryTotal>,
}

impl MonthSummary {
    fn new(month: String) -> Self {
        Self {
            month,
            total: Money::zero(),
            categories: Vec::new(),
        }
    }

    fn add(&mut self, category: &str, amount: Money) {
        self.total += amount;
        match self.categories.iter_mut().find(|c| c.category == category) {
            Some(entry) => entry.subtotal += amount,
            None => self.categories.push(CategoryTotal {
                category: category.to_string(),
                subtotal: amount,
            }),
        }
    }

    /// Subtotal for a category, if any record in the month used it
    pub fn category(&self, category: &str) -> Option<Money> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.subtotal)
    }
}

/// Spending summary across all months
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Months in first-occurrence order
    pub months: Vec<MonthSummary>,
}

impl Summary {
    /// Look up a month by its `YYYY-MM` key
    pub fn month(&self, key: &str) -> Option<&MonthSummary> {
        self.months.iter().find(|m| m.month == key)
    }

    /// Sum of every month's total
    pub fn grand_total(&self) -> Money {
        self.months.iter().map(|m| m.total).sum()
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Summarize records by month and category in a single pass
pub fn summarize(records: &[ExpenseRecord]) -> Summary {
    let mut months: Vec<MonthSummary> = Vec::new();

    for record in records {
        let key = record.month_key();
        let index = match months.iter().position(|m| m.month == key) {
            Some(index) => index,
            None => {
                months.push(MonthSummary::new(key));
                months.len() - 1
            }
        };
        months[index].add(&record.category, record.amount);
    }

    debug!(
        records = records.len(),
        months = months.len(),
        "computed expense summary"
    );

    Summary { months }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(cents: i64, category: &str, date: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            Money::from_cents(cents),
            "",
            category,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    #[test]
    fn test_empty_input_gives_empty_summary() {
        let summary = summarize(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.grand_total(), Money::zero());
    }

    #[test]
    fn test_two_month_scenario() {
        let records = vec![
            record(1250, "Food", "2024-01-05"),
            record(725, "Food", "2024-01-20"),
            record(3000, "Transportation", "2024-02-01"),
        ];

        let summary = summarize(&records);

        assert_eq!(
            summary,
            Summary {
                months: vec![
                    MonthSummary {
                        month: "2024-01".into(),
                        total: Money::from_cents(1975),
                        categories: vec![CategoryTotal {
                            category: "Food".into(),
                            subtotal: Money::from_cents(1975),
                        }],
                    },
                    MonthSummary {
                        month: "2024-02".into(),
                        total: Money::from_cents(3000),
                        categories: vec![CategoryTotal {
                            category: "Transportation".into(),
                            subtotal: Money::from_cents(3000),
                        }],
                    },
                ],
            }
        );
    }

    #[test]
    fn test_first_occurrence_order_is_kept() {
        let records = vec![
            record(100, "Other", "2024-03-10"),
            record(200, "Food", "2024-01-02"),
            record(300, "Entertainment", "2024-03-11"),
            record(400, "Other", "2024-03-12"),
        ];

        let summary = summarize(&records);
        let months: Vec<_> = summary.months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["2024-03", "2024-01"]);

        let march = summary.month("2024-03").unwrap();
        let categories: Vec<_> = march.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(categories, vec!["Other", "Entertainment"]);
        assert_eq!(march.category("Other"), Some(Money::from_cents(500)));
        assert_eq!(march.total, Money::from_cents(800));
    }

    #[test]
    fn test_totals_match_record_sums() {
        let records = vec![
            record(1999, "Food", "2023-12-31"),
            record(1, "Food", "2024-01-01"),
            record(5000, "Transportation", "2024-01-15"),
            record(250, "Entertainment", "2024-01-15"),
            record(333, "Other", "2024-02-29"),
            record(667, "Other", "2024-02-01"),
        ];

        let summary = summarize(&records);
        let record_total: Money = records.iter().map(|r| r.amount).sum();
        assert_eq!(summary.grand_total(), record_total);

        for month in &summary.months {
            let category_total: Money = month.categories.iter().map(|c| c.subtotal).sum();
            assert_eq!(month.total, category_total);

            let matching: Money = records
                .iter()
                .filter(|r| r.month_key() == month.month)
                .map(|r| r.amount)
                .sum();
            assert_eq!(month.total, matching);
        }
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let records = vec![
            record(1250, "Food", "2024-01-05"),
            record(3000, "Transportation", "2024-02-01"),
        ];
        assert_eq!(summarize(&records), summarize(&records));
    }

    #[test]
    fn test_same_month_different_years_are_separate() {
        let records = vec![
            record(100, "Food", "2023-01-05"),
            record(200, "Food", "2024-01-05"),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.month("2023-01").unwrap().total, Money::from_cents(100));
        assert_eq!(summary.month("2024-01").unwrap().total, Money::from_cents(200));
    }
}
