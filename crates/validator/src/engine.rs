//! Record validation
//!
//! [`RecordValidator`] owns a record, its rule set and options. Construction
//! normalizes the record once; [`RecordValidator::validate`] then evaluates
//! every ruled field concurrently and folds the per-field outcomes into a
//! [`Validation`].
//!
//! ```
//! # tokio_test::block_on(async {
//! use sift_validator::{Record, RecordValidator, Rule, RuleSet, Validation};
//!
//! let record = Record::new().with("a", "x").with("b", "y");
//! let rules = RuleSet::new().field("b", [Rule::new("same").param("field", "a")]);
//!
//! let validation = RecordValidator::new(record, rules).validate().await.unwrap();
//! assert_eq!(
//!     validation.errors().and_then(|e| e.get("b")),
//!     Some("Not the same as a"),
//! );
//! # });
//! ```

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::error::{ValidatorError, ValidatorResult};
use crate::field::FieldEvaluator;
use crate::normalize::normalize;
use crate::options::ValidationOptions;
use crate::outcome::{FieldErrors, Validation};
use crate::record::Record;
use crate::registry::ValidatorRegistry;
use crate::rule::RuleSet;

/// Validates one record against a rule set.
///
/// Create one per validation request. The record is read-only once
/// construction has normalized it, so [`validate`](Self::validate) can be
/// called repeatedly and returns the same result each time.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    record: Record,
    rules: RuleSet,
    options: ValidationOptions,
    registry: Arc<ValidatorRegistry>,
}

impl RecordValidator {
    /// Creates a validator with default options and the process-wide registry.
    pub fn new(record: Record, rules: RuleSet) -> Self {
        Self::builder(record, rules).build()
    }

    /// Creates a validator with explicit options and the process-wide registry.
    pub fn with_options(record: Record, rules: RuleSet, options: ValidationOptions) -> Self {
        Self::builder(record, rules).options(options).build()
    }

    pub fn builder(record: Record, rules: RuleSet) -> RecordValidatorBuilder {
        RecordValidatorBuilder {
            record,
            rules,
            options: ValidationOptions::default(),
            registry: None,
        }
    }

    /// The record as seen by validators, after normalization.
    #[must_use]
    pub fn record(&self) -> &Record {
        &self.record
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<ValidatorRegistry> {
        &self.registry
    }

    /// Checks that every rule names a registered validator, without
    /// evaluating anything.
    pub fn check_rules(&self) -> ValidatorResult<()> {
        match self
            .rules
            .rules()
            .find(|(_, rule)| !self.registry.contains(&rule.validator))
        {
            Some((field, rule)) => {
                warn!(field, validator = %rule.validator, "rule references unregistered validator");
                Err(ValidatorError::validator_not_found(&rule.validator, field))
            }
            None => Ok(()),
        }
    }

    /// Validates the record.
    ///
    /// Every field in the rule set is evaluated concurrently; fields only in
    /// the record are ignored. Invalid data yields `Ok(Validation::Invalid)`.
    /// `Err` is returned only for configuration defects or timeouts, and
    /// reports the first such field in rule-set order after all fields have
    /// finished.
    pub async fn validate(&self) -> ValidatorResult<Validation> {
        let evaluator = FieldEvaluator::new(&self.registry, &self.record);
        let timeout = self.options.timeout();

        let evaluations = self.rules.iter().map(|(field, rules)| async move {
            let outcome = match timeout {
                Some(after) => bounded(field, after, evaluator.evaluate(field, rules)).await,
                None => evaluator.evaluate(field, rules).await,
            };
            (field, outcome)
        });

        let mut errors = FieldErrors::new();
        for (field, outcome) in join_all(evaluations).await {
            if let Some(message) = outcome? {
                errors.insert(field.as_str(), message);
            }
        }

        debug!(
            fields = self.rules.len(),
            failed = errors.len(),
            "record validated"
        );
        Ok(Validation::from_errors(errors))
    }
}

async fn bounded<F>(field: &str, after: Duration, evaluation: F) -> ValidatorResult<Option<String>>
where
    F: Future<Output = ValidatorResult<Option<String>>>,
{
    match tokio::time::timeout(after, evaluation).await {
        Ok(outcome) => outcome,
        Err(_elapsed) => {
            warn!(field, ?after, "field validation timed out");
            Err(ValidatorError::Timeout {
                field: field.to_owned(),
                after,
            })
        }
    }
}

/// Builder for [`RecordValidator`].
#[derive(Debug)]
#[must_use = "builders do nothing unless built"]
pub struct RecordValidatorBuilder {
    record: Record,
    rules: RuleSet,
    options: ValidationOptions,
    registry: Option<Arc<ValidatorRegistry>>,
}

impl RecordValidatorBuilder {
    pub fn options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.options.trim = trim;
        self
    }

    pub fn timeout(mut self, after: Duration) -> Self {
        self.options = self.options.with_timeout(after);
        self
    }

    /// Uses `registry` instead of the process-wide one.
    pub fn registry(mut self, registry: impl Into<Arc<ValidatorRegistry>>) -> Self {
        self.registry = Some(registry.into());
        self
    }

    /// Normalizes the record and returns the validator.
    pub fn build(self) -> RecordValidator {
        let Self {
            mut record,
            rules,
            options,
            registry,
        } = self;

        let trimmed = normalize(&mut record, &options);
        if trimmed > 0 {
            debug!(trimmed, "normalized record");
        }

        RecordValidator {
            record,
            rules,
            options,
            registry: registry.unwrap_or_else(crate::registry::global),
        }
    }
}
