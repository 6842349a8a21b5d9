use std::{fs, path::Path};

use serde_json::Value;

use crate::error::{Error, Result};

/// Read and decode a JSON document from `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::FileUnreadable {
        path: path.to_owned(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| Error::DecodeFailure {
        path: path.to_owned(),
        source,
    })
}

/// Take the records out of a decoded document.
///
/// Anything other than a non-empty list is rejected, `document` names the
/// input in the resulting error.
pub fn records(value: Value, document: &'static str) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) if !items.is_empty() => Ok(items),
        _ => Err(Error::EmptyInput { document }),
    }
}
