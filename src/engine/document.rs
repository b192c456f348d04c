//! Conversion between raw bytes and the generic YAML tree.

use crate::error::{Error, Result};
use serde_yaml::{Mapping, Value};

/// The decoded input: a mapping whose top-level keys are all strings.
pub type Document = Mapping;

/// Decodes `input` into a [`Document`].
///
/// Empty input decodes to an empty document. Anything whose top level is not
/// a string-keyed mapping is rejected, as are multi-document streams. Merge
/// keys (`<<: *anchor`) are resolved throughout the tree.
pub fn decode(input: &[u8]) -> Result<Document> {
    if input.iter().all(u8::is_ascii_whitespace) {
        return Ok(Document::new());
    }

    let mut value: Value = serde_yaml::from_slice(input).map_err(Error::Decode)?;
    value.apply_merge().map_err(Error::Decode)?;
    match value {
        Value::Null => Ok(Document::new()),
        Value::Mapping(mapping) => {
            if let Some(key) = mapping.keys().find(|key| !key.is_string()) {
                return Err(Error::DecodeShape {
                    found: format!("a mapping with {} as a key", describe(key)),
                });
            }
            Ok(mapping)
        }
        other => Err(Error::DecodeShape { found: describe(&other).to_string() }),
    }
}

/// Encodes a rendered tree back to YAML bytes.
pub fn encode(document: &Document) -> Result<Vec<u8>> {
    serde_yaml::to_string(document).map(String::into_bytes).map_err(Error::Encode)
}

/// Whether every key of `mapping` is a string.
pub fn has_string_keys(mapping: &Mapping) -> bool {
    mapping.keys().all(Value::is_string)
}

/// Human readable name of the shape of `value`, used in error messages.
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
