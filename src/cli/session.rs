//! Interactive menu session
//!
//! A two-state machine: the session stays `Running` through add, summary,
//! and invalid-choice iterations, and moves to `Exited` on the exit choice or
//! when input runs out.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::clock::Clock;
use crate::config::TrackerConfig;
use crate::display;
use crate::error::{TrackerError, TrackerResult};
use crate::models::CategorySet;
use crate::reports::summarize;
use crate::services::entry::{self, prompt_line};
use crate::storage::RecordStore;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exited,
}

/// A menu selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewSummary,
    Exit,
    Invalid(String),
}

impl MenuChoice {
    /// Parse the text typed at the menu prompt
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::AddExpense,
            "2" => Self::ViewSummary,
            "3" => Self::Exit,
            other => Self::Invalid(other.to_string()),
        }
    }
}

/// An interactive expense tracker session over arbitrary input and output
pub struct Session<R, W, C> {
    store: RecordStore,
    categories: CategorySet,
    currency_symbol: String,
    clock: C,
    input: R,
    output: W,
    state: SessionState,
}

impl<R, W, C> Session<R, W, C>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    /// Create a session around an already loaded store
    pub fn new(config: &TrackerConfig, store: RecordStore, clock: C, input: R, output: W) -> Self {
        Self {
            store,
            categories: config.category_set(),
            currency_symbol: config.currency_symbol.clone(),
            clock,
            input,
            output,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Consume the session, returning its output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run menu iterations until the session exits
    pub fn run(&mut self) -> TrackerResult<()> {
        while self.state == SessionState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Show the menu, handle one choice, and return the resulting state
    ///
    /// Only console I/O failures are returned as errors; input and storage
    /// problems are reported to the user and the session keeps running.
    pub fn step(&mut self) -> TrackerResult<SessionState> {
        if self.state == SessionState::Exited {
            return Ok(self.state);
        }

        self.print_menu()?;
        let choice = match prompt_line(&mut self.input, &mut self.output, "Choose an option: ")? {
            Some(line) => MenuChoice::parse(&line),
            None => {
                writeln!(self.output)?;
                MenuChoice::Exit
            }
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::AddExpense => self.add_expense()?,
            MenuChoice::ViewSummary => self.view_summary()?,
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                self.state = SessionState::Exited;
            }
            MenuChoice::Invalid(_) => {
                writeln!(self.output, "Invalid choice. Please try again.")?;
            }
        }

        Ok(self.state)
    }

    fn print_menu(&mut self) -> TrackerResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Expense Tracker")?;
        writeln!(self.output, "1. Add Expense")?;
        writeln!(self.output, "2. View Summary")?;
        writeln!(self.output, "3. Exit")?;
        Ok(())
    }

    fn add_expense(&mut self) -> TrackerResult<()> {
        let (amount, description) =
            match entry::collect_amount_and_description(&mut self.input, &mut self.output) {
                Ok(collected) => collected,
                Err(TrackerError::InvalidInput(reason)) => {
                    debug!(%reason, "rejected expense amount");
                    writeln!(
                        self.output,
                        "Invalid input. Please enter a numeric value for the amount."
                    )?;
                    writeln!(self.output, "({})", reason)?;
                    return Ok(());
                }
                Err(e @ TrackerError::MissingInput(_)) => {
                    writeln!(self.output)?;
                    writeln!(self.output, "{}", e)?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

        let category =
            match entry::collect_category(&self.categories, &mut self.input, &mut self.output) {
                Ok(category) => category,
                Err(e @ TrackerError::MissingInput(_)) => {
                    writeln!(self.output)?;
                    writeln!(self.output, "{}", e)?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

        let record = entry::create_record(amount, description, category, &self.clock);

        match self.store.append_and_save(record) {
            Ok(()) => {
                info!(count = self.store.len(), "expense added");
                writeln!(self.output, "Expense added successfully!")?;
            }
            Err(e) => {
                writeln!(self.output, "Failed to save expense: {}", e)?;
            }
        }

        Ok(())
    }

    fn view_summary(&mut self) -> TrackerResult<()> {
        if self.store.is_empty() {
            writeln!(self.output, "No expenses recorded yet.")?;
            return Ok(());
        }

        let summary = summarize(self.store.records());
        write!(
            self.output,
            "{}",
            display::render(&summary, &self.currency_symbol)
        )?;
        Ok(())
    }
}
