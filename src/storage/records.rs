//! Expense record store backed by a JSON file
//!
//! The file holds a single top-level array of records. Every save rewrites
//! the whole array.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::TrackerError;
use crate::models::ExpenseRecord;

use super::file_io::{read_json, write_json_atomic};

/// Read all records from `path`; a missing file yields no records
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<ExpenseRecord>, TrackerError> {
    read_json(path)
}

/// Replace the contents of `path` with `records`
pub fn save_records(path: impl AsRef<Path>, records: &[ExpenseRecord]) -> Result<(), TrackerError> {
    write_json_atomic(path, records)
}

/// In-memory record list, in entry order, paired with its data file
pub struct RecordStore {
    path: PathBuf,
    records: Vec<ExpenseRecord>,
}

impl RecordStore {
    /// Create a new, empty store for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Create a store and load it from disk
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TrackerError> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory records with the file contents
    pub fn load(&mut self) -> Result<(), TrackerError> {
        self.records = load_records(&self.path)?;
        info!(
            path = %self.path.display(),
            count = self.records.len(),
            "loaded expense records"
        );
        Ok(())
    }

    /// Write all records to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        save_records(&self.path, &self.records)?;
        info!(
            path = %self.path.display(),
            count = self.records.len(),
            "saved expense records"
        );
        Ok(())
    }

    /// Append a record in memory only
    pub fn append(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    /// Append a record and persist the store
    ///
    /// If the save fails the record is dropped again, so the in-memory list
    /// always matches what was last written.
    pub fn append_and_save(&mut self, record: ExpenseRecord) -> Result<(), TrackerError> {
        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            error!(path = %self.path.display(), error = %e, "failed to save expense records");
            return Err(e);
        }
        Ok(())
    }

    /// All records in entry order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
