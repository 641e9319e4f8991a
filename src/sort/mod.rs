//! Sort Module
//!
//! The Sort Engine: orders records by one field and a direction.
//!
//! ## Comparator
//! - Values of the same kind compare naturally (numbers by total order)
//! - Values of different kinds order as null < bool < number < text
//! - A missing field compares like null
//! - Descending flips the sign of the comparison
//!
//! The comparator is a total order, and `sort_by` is stable, so equal keys
//! keep their relative order.

use std::cmp::Ordering;
use std::fmt;

use crate::dataset::Dataset;
use crate::record::{Record, Value};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse `asc` / `desc`, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Apply the direction to an ascending ordering
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active column sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Compare two records under this sort
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.direction
            .apply(compare_values(a.get(&self.field), b.get(&self.field)))
    }
}

/// Three-way ascending comparison of two (possibly missing) field values
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.unwrap_or(&Value::Null);
    let b = b.unwrap_or(&Value::Null);

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => x.total_cmp(y),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        _ => a.rank().cmp(&b.rank()),
    }
}

/// Sort records in place (stable)
pub fn sort_records(records: &mut [Record], sort: &SortState) {
    records.sort_by(|a, b| sort.compare(a, b));
}

/// Sort dataset positions in place by the records they point at (stable)
///
/// Positions outside the dataset compare like records with no fields.
pub fn sort_indices(dataset: &Dataset, indices: &mut [usize], sort: &SortState) {
    let empty = Record::new();
    indices.sort_by(|&a, &b| {
        let a = dataset.get(a).unwrap_or(&empty);
        let b = dataset.get(b).unwrap_or(&empty);
        sort.compare(a, b)
    });
}
