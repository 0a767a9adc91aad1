//! Membership validator.

use serde_json::Value;

use super::{ENUM, INVALID_VALUE_MESSAGE, array_param};
use crate::error::ValidatorResult;
use crate::outcome::Outcome;
use crate::record::Record;
use crate::value::{Params, strict_eq};

/// `enum`: passes when the value strictly equals one of `params.values`.
pub fn one_of(value: &Value, params: &Params, _record: &Record) -> ValidatorResult<Outcome> {
    let allowed = array_param(params, ENUM, "values")?;
    let found = allowed.iter().any(|candidate| strict_eq(candidate, value));
    Ok(Outcome::check(found, INVALID_VALUE_MESSAGE))
}
