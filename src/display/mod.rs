//! Display formatting for terminal output
//!
//! Turns reports into text. Nothing here writes to the terminal; callers
//! decide where the text goes.

pub mod summary;

pub use summary::render;
