//! Dataset Module
//!
//! The Dataset Store: the full record set currently assigned to a view.
//!
//! ## Responsibilities
//! - Hold records, assigned atomically as a whole (replace, never merge)
//! - Serve as the source of truth for "total rows"
//! - Load records from JSON files
//!
//! Records are shared behind an `Arc`, so cloning a view state never copies
//! rows. Filtered subsets refer to records by position in this set.

mod loader;

pub use loader::{load_path, load_records};

use std::sync::Arc;

use crate::record::Record;

/// Immutable, ordered record set
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Dataset {
    /// Create a dataset from owned records
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Total number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a position
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// All records, in assignment order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Position of the first record whose `key_field` equals `key`
    pub fn position_of(&self, key_field: &str, key: &crate::record::Value) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.key(key_field) == Some(key))
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
