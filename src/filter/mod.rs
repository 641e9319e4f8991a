//! Filter Module
//!
//! The Filter Engine: case-insensitive substring search over records.
//!
//! ## Matching Rules
//! - The term is normalised first: trimmed, `*` stripped, lowercased
//! - "All fields" matches when ANY text value contains the term
//! - A named field matches only when that field is text and contains the term
//! - Missing and non-text values never match
//! - An empty term matches nothing; clearing a filter is a separate operation
//!
//! Results are positions into the dataset, in dataset order, so a filtered
//! set is always a subset of the dataset it was computed from.

use std::fmt;

use crate::dataset::Dataset;
use crate::record::{Record, Value};

/// Selector value meaning "search every field"
pub const ALL_FIELDS: &str = "all";

/// Which fields a search looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldSelector {
    #[default]
    All,
    Field(String),
}

impl FieldSelector {
    /// Interpret a selector value, where `"all"` means every field
    pub fn parse(value: &str) -> Self {
        if value == ALL_FIELDS {
            FieldSelector::All
        } else {
            FieldSelector::Field(value.to_string())
        }
    }

    /// The selector value as offered to the filter-column control
    pub fn as_str(&self) -> &str {
        match self {
            FieldSelector::All => ALL_FIELDS,
            FieldSelector::Field(field) => field,
        }
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalised search term
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalise raw input: trim, strip wildcards, lowercase
    pub fn normalize(raw: &str) -> Self {
        SearchTerm(raw.trim().replace('*', "").to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a single value contains the term, case-insensitively
fn value_matches(value: &Value, term: &SearchTerm) -> bool {
    value
        .as_text()
        .is_some_and(|text| text.to_lowercase().contains(term.as_str()))
}

/// Whether a record matches the term under the selector
pub fn matches(record: &Record, selector: &FieldSelector, term: &SearchTerm) -> bool {
    if term.is_empty() {
        return false;
    }
    match selector {
        FieldSelector::All => record.values().any(|v| value_matches(v, term)),
        FieldSelector::Field(field) => record
            .get(field)
            .is_some_and(|v| value_matches(v, term)),
    }
}

/// Positions of every matching record, in dataset order
pub fn filter_indices(dataset: &Dataset, selector: &FieldSelector, term: &SearchTerm) -> Vec<usize> {
    if term.is_empty() {
        return Vec::new();
    }
    dataset
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, selector, term))
        .map(|(index, _)| index)
        .collect()
}
