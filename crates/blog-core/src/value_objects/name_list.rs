//! Category/tag name lists arriving in loose shapes
//!
//! Clients send names as a JSON array, as a string holding a JSON array, or
//! as a comma-separated string. [`NameList`] accepts all three and anything
//! else collapses to an empty list instead of failing the request.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An ordered list of trimmed, non-empty, distinct names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameList(Vec<String>);

impl NameList {
    /// Build from raw names. Whitespace is trimmed, empty entries dropped and
    /// repeated names kept only at their first position.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() && !out.iter().any(|n| n == name) {
                out.push(name.to_string());
            }
        }
        Self(out)
    }

    /// Interpret a string: a JSON array if it parses as one, otherwise a comma list
    pub fn parse_str(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => Self::from_array(&items),
            _ => Self::new(raw.split(',')),
        }
    }

    /// Interpret any JSON value; non-string, non-array input yields an empty list
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(raw) => Self::parse_str(raw),
            Value::Array(items) => Self::from_array(items),
            _ => Self::default(),
        }
    }

    fn from_array(items: &[Value]) -> Self {
        Self::new(items.iter().filter_map(Value::as_str))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'de> Deserialize<'de> for NameList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl From<Vec<String>> for NameList {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl<'a> IntoIterator for &'a NameList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
