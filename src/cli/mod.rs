//! CLI front end
//!
//! The numbered-menu session that drives entry, storage, and summaries.

pub mod session;

pub use session::{MenuChoice, Session, SessionState};
