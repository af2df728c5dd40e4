//! Business logic layer for the expense tracker

pub mod entry;

pub use entry::{
    collect_amount_and_description, collect_category, create_record, parse_amount,
    resolve_category,
};
