//! Per-field rule evaluation.

use tracing::{debug, trace};

use crate::error::{ValidatorError, ValidatorResult};
use crate::outcome::Outcome;
use crate::record::Record;
use crate::registry::ValidatorRegistry;
use crate::rule::Rule;

/// Runs one field's rules in order against a record.
///
/// Stops at the first failing rule; later rules are never dispatched.
#[derive(Debug, Clone, Copy)]
pub struct FieldEvaluator<'a> {
    registry: &'a ValidatorRegistry,
    record: &'a Record,
}

impl<'a> FieldEvaluator<'a> {
    pub fn new(registry: &'a ValidatorRegistry, record: &'a Record) -> Self {
        Self { registry, record }
    }

    /// Evaluates `rules` for `field`.
    ///
    /// Returns `Ok(None)` when every rule passes and `Ok(Some(message))` for
    /// the first failure, where `message` is the rule's own message if set.
    /// Unknown validators and unusable parameters are errors.
    pub async fn evaluate(&self, field: &str, rules: &[Rule]) -> ValidatorResult<Option<String>> {
        let value = self.record.resolve(field);

        for (index, rule) in rules.iter().enumerate() {
            let validator = self
                .registry
                .get(&rule.validator)
                .ok_or_else(|| ValidatorError::validator_not_found(&rule.validator, field))?;

            trace!(field, validator = %rule.validator, index, "dispatching rule");

            if let Outcome::Fail(default) = validator.evaluate(value, &rule.params, self.record).await? {
                let message = rule
                    .message
                    .clone()
                    .unwrap_or_else(|| default.into_owned());
                debug!(field, validator = %rule.validator, index, %message, "field failed");
                return Ok(Some(message));
            }
        }

        Ok(None)
    }
}
