//! The flat record being validated.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ValidatorError, ValidatorResult};

static NULL: Value = Value::Null;

/// A flat mapping of field names to scalar values.
///
/// Field order follows insertion order. Fields that are not present resolve
/// to `null` through [`Record::resolve`], which is how validators see a
/// missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning the previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Builder-style [`Record::insert`].
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Returns the value of a field if it is present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the value of a field, or `null` when it is absent.
    #[must_use]
    pub fn resolve(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&NULL)
    }

    /// Returns true if the field is present (even when its value is null).
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.fields.values_mut()
    }

    /// Parses a record from a JSON object, keeping the document's field order.
    pub fn from_json(json: &str) -> ValidatorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<Value> for Record {
    type Error = ValidatorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(ValidatorError::InvalidRecord(format!(
                "expected a JSON object, got {}",
                kind_name(&other)
            ))),
        }
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

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_field_resolves_to_null() {
        let record = Record::new().with("name", "john");
        assert_eq!(record.resolve("name"), &json!("john"));
        assert_eq!(record.resolve("email"), &Value::Null);
        assert!(!record.contains("email"));
    }

    #[test]
    fn from_json_keeps_field_order() {
        let record = Record::from_json(r#"{"b": 1, "a": "x", "c": true}"#).unwrap();
        let fields: Vec<_> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(fields, ["b", "a", "c"]);
    }

    #[test]
    fn non_object_is_rejected() {
        let err = Record::try_from(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ValidatorError::InvalidRecord(ref m) if m.contains("an array")));
    }
}
