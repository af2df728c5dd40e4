//! Expense entry collection
//!
//! Prompts for the pieces of a new expense, validates them, and builds the
//! record. Parsing and validation are kept separate from prompting so they
//! can be used without a console.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::clock::Clock;
use crate::error::{TrackerError, TrackerResult};
use crate::models::money::MAX_CENTS;
use crate::models::{CategoryResolution, CategorySet, ExpenseRecord, Money, MoneyParseError};

/// Parse a user-entered amount; it must be numeric, greater than zero, and
/// no larger than [`MAX_CENTS`]
pub fn parse_amount(input: &str) -> TrackerResult<Money> {
    let amount = Money::parse(input).map_err(|e| match e {
        MoneyParseError::OutOfRange(_) => TrackerError::InvalidInput(format!(
            "amount must not exceed {}",
            Money::from_cents(MAX_CENTS)
        )),
        MoneyParseError::InvalidFormat(_) => TrackerError::invalid_amount(input.trim()),
    })?;

    if !amount.is_positive() {
        return Err(TrackerError::InvalidInput(format!(
            "amount must be greater than zero, got {}",
            input.trim()
        )));
    }

    Ok(amount)
}

/// Match input against the category set, falling back when unrecognized
pub fn resolve_category(categories: &CategorySet, input: &str) -> CategoryResolution {
    categories.resolve(input)
}

/// Build a new record dated today according to `clock`
pub fn create_record(
    amount: Money,
    description: impl Into<String>,
    category: impl Into<String>,
    clock: &impl Clock,
) -> ExpenseRecord {
    ExpenseRecord::new(amount, description, category, clock.today())
}

/// Prompt for the amount, then the description
///
/// An unparseable amount is returned as `InvalidInput` before the
/// description is asked for. Running out of input is `MissingInput`.
pub fn collect_amount_and_description<R, W>(
    input: &mut R,
    output: &mut W,
) -> TrackerResult<(Money, String)>
where
    R: BufRead,
    W: Write,
{
    let raw_amount = prompt_line(input, output, "Enter the expense amount: ")?
        .ok_or(TrackerError::MissingInput("amount"))?;
    let amount = parse_amount(&raw_amount)?;

    let description = prompt_line(input, output, "Enter a brief description of the expense: ")?
        .ok_or(TrackerError::MissingInput("description"))?;

    Ok((amount, description))
}

/// Show the category list and prompt for one
///
/// Unrecognized input is not an error: the fallback category is used and the
/// user is told so.
pub fn collect_category<R, W>(
    categories: &CategorySet,
    input: &mut R,
    output: &mut W,
) -> TrackerResult<String>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Categories: {}", categories)?;
    let raw = prompt_line(input, output, "Enter the expense category: ")?
        .ok_or(TrackerError::MissingInput("category"))?;

    let resolution = resolve_category(categories, &raw);
    if resolution.coerced {
        warn!(input = %raw, fallback = %resolution.category, "unrecognized category");
        writeln!(
            output,
            "Invalid category. Defaulting to '{}'.",
            resolution.category
        )?;
    }

    Ok(resolution.category)
}

/// Print a prompt and read one line
///
/// Returns `None` at end of input. The trailing newline is removed.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> TrackerResult<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
