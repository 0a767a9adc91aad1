//! Error types for rule-set configuration defects
//!
//! Data that fails a rule is never an error here: it becomes an entry in
//! [`FieldErrors`](crate::FieldErrors). `ValidatorError` is reserved for
//! problems with the rule set, the registry, or the runtime budget, so callers
//! can tell a misconfigured validator apart from invalid input.

use std::time::Duration;

/// Result alias used throughout the crate.
pub type ValidatorResult<T> = Result<T, ValidatorError>;

/// Errors raised while dispatching or configuring validators.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// A rule names a validator that is not registered.
    #[error("validator '{name}' is not registered (referenced by field '{field}')")]
    ValidatorNotFound {
        /// Name used by the rule.
        name: String,
        /// Field whose rule list referenced it.
        field: String,
    },

    /// A validator needs a parameter the rule does not carry.
    #[error("validator '{validator}' requires parameter '{param}'")]
    MissingParam {
        /// Validator that rejected the rule.
        validator: String,
        /// Name of the missing parameter.
        param: String,
    },

    /// A parameter is present but unusable (wrong type, bad pattern, ...).
    #[error("validator '{validator}' has invalid parameter '{param}': {reason}")]
    InvalidParam {
        /// Validator that rejected the rule.
        validator: String,
        /// Name of the offending parameter.
        param: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A field evaluation did not finish within the configured budget.
    #[error("field '{field}' did not finish validating within {after:?}")]
    Timeout {
        /// Field that was still running.
        field: String,
        /// Configured per-field budget.
        after: Duration,
    },

    /// Input could not be interpreted as a flat record.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// Rules, options or records supplied as malformed JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValidatorError {
    /// Creates a [`ValidatorError::ValidatorNotFound`].
    pub fn validator_not_found(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ValidatorNotFound {
            name: name.into(),
            field: field.into(),
        }
    }

    /// Creates a [`ValidatorError::MissingParam`].
    pub fn missing_param(validator: impl Into<String>, param: impl Into<String>) -> Self {
        Self::MissingParam {
            validator: validator.into(),
            param: param.into(),
        }
    }

    /// Creates a [`ValidatorError::InvalidParam`].
    pub fn invalid_param(
        validator: impl Into<String>,
        param: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParam {
            validator: validator.into(),
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for defects in the rule set or registry, as opposed to
    /// runtime conditions such as timeouts.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ValidatorNotFound { .. } | Self::MissingParam { .. } | Self::InvalidParam { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_validator_and_field() {
        let err = ValidatorError::validator_not_found("postcode", "zip");
        assert_eq!(
            err.to_string(),
            "validator 'postcode' is not registered (referenced by field 'zip')"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn timeout_is_not_a_configuration_defect() {
        let err = ValidatorError::Timeout {
            field: "email".into(),
            after: Duration::from_millis(5),
        };
        assert!(!err.is_configuration());
        assert!(err.to_string().contains("'email'"));
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ValidatorError::from(parse);
        assert!(matches!(err, ValidatorError::Json(_)));
    }
}
