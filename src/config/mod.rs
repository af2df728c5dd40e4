//! Configuration module for the expense tracker
//!
//! Replaces module-level constants with an explicit config object that is
//! passed into each component at construction.

pub mod settings;

pub use settings::TrackerConfig;
