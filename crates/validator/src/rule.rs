//! Rules and rule sets
//!
//! A [`Rule`] names a validator, carries its parameters and may override the
//! validator's default failure message. A [`RuleSet`] maps field names to an
//! ordered list of rules; order inside a list decides which failure wins.
//!
//! Both deserialize from the flat JSON shape rule objects are usually written
//! in, where every key other than `validator` and `message` is a parameter:
//!
//! ```
//! use sift_validator::RuleSet;
//!
//! let rules = RuleSet::from_json(r#"{
//!     "gender": [{ "validator": "enum", "values": ["m", "f"] }],
//!     "name":   [{ "validator": "notEmpty", "message": "Name is required" }]
//! }"#).unwrap();
//!
//! assert_eq!(rules.len(), 2);
//! assert_eq!(rules.get("gender").unwrap()[0].validator, "enum");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidatorResult;
use crate::value::Params;

/// One validator invocation attached to a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Registry name of the validator to run.
    pub validator: String,

    /// Message reported instead of the validator's default when this rule
    /// fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Validator-specific parameters.
    #[serde(flatten)]
    pub params: Params,
}

impl Rule {
    /// Creates a rule with no parameters and the default message.
    pub fn new(validator: impl Into<String>) -> Self {
        Self {
            validator: validator.into(),
            message: None,
            params: Params::new(),
        }
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Overrides the failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Field name to ordered rule list.
///
/// Fields are evaluated and reported in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    fields: IndexMap<String, Vec<Rule>>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the rule list for a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<I>(mut self, field: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        self.insert(field, rules);
        self
    }

    /// Sets the rule list for a field, returning the previous list.
    pub fn insert<I>(&mut self, field: impl Into<String>, rules: I) -> Option<Vec<Rule>>
    where
        I: IntoIterator<Item = Rule>,
    {
        self.fields
            .insert(field.into(), rules.into_iter().collect())
    }

    /// Appends a single rule to a field's list.
    pub fn push(&mut self, field: impl Into<String>, rule: Rule) {
        self.fields.entry(field.into()).or_default().push(rule);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[Rule]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Field names in evaluation order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &[Rule])> {
        self.fields.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Every rule in the set, paired with the field it belongs to.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.fields
            .iter()
            .flat_map(|(field, rules)| rules.iter().map(move |rule| (field.as_str(), rule)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parses a rule set from JSON.
    pub fn from_json(json: &str) -> ValidatorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K> FromIterator<(K, Vec<Rule>)> for RuleSet
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Vec<Rule>)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
