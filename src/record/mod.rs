//! Record Module
//!
//! The unit of data a view displays.
//!
//! ## Model
//! - A `Record` maps field names to `Value`s
//! - Values are string-coercible for display
//! - Records are identified by a configurable key field
//! - Fields may be missing; every consumer treats absence defensively

mod value;

pub use value::Value;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single row: field name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field assignment
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set a field, returning the previous value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Get the identifying value under `key_field`
    pub fn key(&self, key_field: &str) -> Option<&Value> {
        self.get(key_field)
    }

    /// Display form of a field; empty when the field is missing
    pub fn display(&self, field: &str) -> String {
        self.get(field).map(Value::to_string).unwrap_or_default()
    }

    /// Iterate over all values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }

    /// Iterate over `(field, value)` pairs in field-name order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields present
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
