//! # sift-validator
//!
//! Rule-driven validation of flat records.
//!
//! A [`RuleSet`] attaches an ordered list of [`Rule`]s to each field. Each
//! rule names a validator in a [`ValidatorRegistry`] and carries that
//! validator's parameters. [`RecordValidator::validate`] evaluates every ruled
//! field concurrently, stops each field at its first failing rule, and
//! returns either [`Validation::Valid`] or a [`FieldErrors`] map holding one
//! message per failed field.
//!
//! ## Quick Start
//!
//! ```
//! # tokio_test::block_on(async {
//! use sift_validator::prelude::*;
//!
//! let record = Record::from_json(r#"{ "name": "  john doe ", "gender": "x" }"#).unwrap();
//! let rules = RuleSet::from_json(r#"{
//!     "name":   [{ "validator": "notEmpty" }],
//!     "gender": [{ "validator": "enum", "values": ["m", "f"] }],
//!     "email":  [{ "validator": "notEmpty", "message": "Email is required" }]
//! }"#).unwrap();
//!
//! let validator = RecordValidator::new(record, rules);
//! assert_eq!(validator.record().resolve("name"), "john doe");
//!
//! let validation = validator.validate().await.unwrap();
//! let errors = validation.errors().unwrap();
//! assert_eq!(errors.get("gender"), Some("Invalid value"));
//! assert_eq!(errors.get("email"), Some("Email is required"));
//! assert!(!errors.contains("name"));
//! # });
//! ```
//!
//! ## Built-in Validators
//!
//! `notEmpty`, `enum`, `regexp`, `email`, `url` and `same`; see [`builtin`].
//!
//! ## Custom Validators
//!
//! Implement [`Validator`] (async) or register a plain function with
//! [`ValidatorRegistry::register_fn`]. Pass the registry to
//! [`RecordValidator::builder`], or extend the process-wide registry with
//! [`add_validator`] before building validators.

pub mod builtin;
pub mod engine;
pub mod error;
pub mod field;
mod normalize;
pub mod options;
pub mod outcome;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod rule;
pub mod traits;
pub mod value;

pub use engine::{RecordValidator, RecordValidatorBuilder};
pub use error::{ValidatorError, ValidatorResult};
pub use field::FieldEvaluator;
pub use options::ValidationOptions;
pub use outcome::{FieldErrors, Outcome, Validation};
pub use record::Record;
pub use registry::{ValidatorRegistry, add_validator, add_validator_fn};
pub use rule::{Rule, RuleSet};
pub use traits::{FnValidator, Validator};
pub use value::Params;
