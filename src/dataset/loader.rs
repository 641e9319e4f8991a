//! Record loading
//!
//! A record file is a JSON array of flat objects.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Result, ViewError};
use crate::record::Record;

/// Parse records from a JSON reader
pub fn load_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let document: serde_json::Value = serde_json::from_reader(reader)?;

    let serde_json::Value::Array(items) = document else {
        return Err(ViewError::InvalidRecord(
            "expected a JSON array of records".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(ViewError::InvalidRecord(format!(
                    "record {index} is not an object"
                )));
            }
            Ok(serde_json::from_value::<Record>(item)?)
        })
        .collect()
}

/// Parse records from a JSON file
pub fn load_path(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path)?;
    let records = load_records(BufReader::new(file))?;
    tracing::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
