//! Summary formatting for terminal output

use std::fmt::Write;

use crate::reports::Summary;

/// Render a summary as text, one section per month
///
/// Each section is a blank line, the month, its total, then an indented line
/// per category. An empty summary renders as an empty string.
pub fn render(summary: &Summary, currency_symbol: &str) -> String {
    let mut out = String::new();

    for month in &summary.months {
        // Writing to a String cannot fail
        let _ = writeln!(out);
        let _ = writeln!(out, "Month: {}", month.month);
        let _ = writeln!(
            out,
            "Total: {}",
            month.total.format_with_symbol(currency_symbol)
        );
        for entry in &month.categories {
            let _ = writeln!(
                out,
                "  {}: {}",
                entry.category,
                entry.subtotal.format_with_symbol(currency_symbol)
            );
        }
    }

    out
}
