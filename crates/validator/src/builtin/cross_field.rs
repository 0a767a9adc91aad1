//! Cross-field validator.

use serde_json::Value;

use super::{SAME, str_param};
use crate::error::ValidatorResult;
use crate::outcome::Outcome;
use crate::record::Record;
use crate::value::{Params, strict_eq};

/// `same`: passes when the record's `params.field` is present and strictly
/// equal to the value.
///
/// The sibling is read from the record, never from another field's
/// evaluation, so the result does not depend on evaluation order.
pub fn same(value: &Value, params: &Params, record: &Record) -> ValidatorResult<Outcome> {
    let other = str_param(params, SAME, "field")?;
    let equal = record
        .get(other)
        .is_some_and(|sibling| strict_eq(sibling, value));
    Ok(Outcome::check(equal, format!("Not the same as {other}")))
}
