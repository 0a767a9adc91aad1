//! Prelude module for convenient imports.
//!
//! ```
//! use sift_validator::prelude::*;
//!
//! let rules = RuleSet::new().field("name", [Rule::new("notEmpty")]);
//! let validator = RecordValidator::new(Record::new(), rules);
//! assert!(validator.check_rules().is_ok());
//! ```

pub use crate::engine::{RecordValidator, RecordValidatorBuilder};
pub use crate::error::{ValidatorError, ValidatorResult};
pub use crate::options::ValidationOptions;
pub use crate::outcome::{FieldErrors, Outcome, Validation};
pub use crate::record::Record;
pub use crate::registry::{ValidatorRegistry, add_validator, add_validator_fn};
pub use crate::rule::{Rule, RuleSet};
pub use crate::traits::{FnValidator, Validator};
pub use crate::value::Params;
