use super::{AttributeError, AttributeResolver};
use camino::Utf8Path;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;

/// Attributes read from the JSON printed by `terraform output -json`.
///
/// Both the native Terraform shape (`{"name": {"value": "...", "type": "string"}}`) and a flat
/// `{"name": "..."}` object are accepted.
#[derive(Debug, Clone, Default)]
pub struct OutputsResolver {
    values: HashMap<String, Value>,
}

impl OutputsResolver {
    /// Parse an outputs document. `origin` names the document in error messages.
    pub fn from_json(origin: &str, text: &str) -> Result<Self, AttributeError> {
        let root: Map<String, Value> = serde_json::from_str(text).map_err(|e| AttributeError::Source {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

        let values = root
            .into_iter()
            .map(|(name, value)| match value {
                Value::Object(mut output) if output.contains_key("value") => {
                    (name, output.remove("value").unwrap_or(Value::Null))
                }
                other => (name, other),
            })
            .collect();

        Ok(Self { values })
    }

    /// Read and parse an outputs file.
    pub fn load(path: &Utf8Path) -> Result<Self, AttributeError> {
        let text = fs::read_to_string(path).map_err(|e| AttributeError::Source {
            origin: format!("'{path}'"),
            message: e.to_string(),
        })?;
        Self::from_json(&format!("'{path}'"), &text)
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl AttributeResolver for OutputsResolver {
    fn get(&self, name: &str) -> Result<String, AttributeError> {
        match self.values.get(name) {
            None | Some(Value::Null) => Err(AttributeError::Missing(name.to_string())),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(AttributeError::NotAString {
                name: name.to_string(),
                found: kind(other),
            }),
        }
    }
}
