//! Built-in validators
//!
//! | name       | fails when                                         | message                   |
//! |------------|----------------------------------------------------|---------------------------|
//! | `notEmpty` | value is null, `false`, zero or empty              | `Required`                |
//! | `enum`     | value is not one of `values`                       | `Invalid value`           |
//! | `regexp`   | `regexp` (with optional `flags`) does not match    | `Invalid value`           |
//! | `email`    | value is not an email address                      | `Invalid email`           |
//! | `url`      | value is not an http(s) URL (scheme optional)      | `Invalid URL`             |
//! | `same`     | value differs from the record's `field`            | `Not the same as <field>` |

mod cross_field;
mod membership;
mod pattern;
mod presence;

pub use cross_field::same;
pub use membership::one_of;
pub use pattern::{RegexpValidator, email, url};
pub use presence::not_empty;

use serde_json::Value;

use crate::error::{ValidatorError, ValidatorResult};
use crate::registry::ValidatorRegistry;
use crate::value::Params;

pub const NOT_EMPTY: &str = "notEmpty";
pub const ENUM: &str = "enum";
pub const REGEXP: &str = "regexp";
pub const EMAIL: &str = "email";
pub const URL: &str = "url";
pub const SAME: &str = "same";

pub(crate) const REQUIRED_MESSAGE: &str = "Required";
pub(crate) const INVALID_VALUE_MESSAGE: &str = "Invalid value";
pub(crate) const INVALID_EMAIL_MESSAGE: &str = "Invalid email";
pub(crate) const INVALID_URL_MESSAGE: &str = "Invalid URL";

/// Registers every built-in validator into `registry`.
pub fn register_builtins(registry: &mut ValidatorRegistry) {
    registry.register_fn(NOT_EMPTY, not_empty);
    registry.register_fn(ENUM, one_of);
    registry.register(REGEXP, RegexpValidator::new());
    registry.register_fn(EMAIL, email);
    registry.register_fn(URL, url);
    registry.register_fn(SAME, same);
}

// ============================================================================
// PARAMETER ACCESS
// ============================================================================

fn required_param<'a>(params: &'a Params, validator: &str, name: &str) -> ValidatorResult<&'a Value> {
    params
        .get(name)
        .ok_or_else(|| ValidatorError::missing_param(validator, name))
}

fn str_param<'a>(params: &'a Params, validator: &str, name: &str) -> ValidatorResult<&'a str> {
    required_param(params, validator, name)?
        .as_str()
        .ok_or_else(|| ValidatorError::invalid_param(validator, name, "expected a string"))
}

fn optional_str_param<'a>(
    params: &'a Params,
    validator: &str,
    name: &str,
) -> ValidatorResult<Option<&'a str>> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ValidatorError::invalid_param(
            validator,
            name,
            "expected a string",
        )),
    }
}

fn array_param<'a>(params: &'a Params, validator: &str, name: &str) -> ValidatorResult<&'a [Value]> {
    required_param(params, validator, name)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ValidatorError::invalid_param(validator, name, "expected an array"))
}
