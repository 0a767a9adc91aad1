//! Presence validator.

use serde_json::Value;

use super::REQUIRED_MESSAGE;
use crate::error::ValidatorResult;
use crate::outcome::Outcome;
use crate::record::Record;
use crate::value::{Params, is_blank};

/// `notEmpty`: fails for null (including absent fields), `false`, zero, and
/// empty strings or collections.
pub fn not_empty(value: &Value, _params: &Params, _record: &Record) -> ValidatorResult<Outcome> {
    Ok(Outcome::check(!is_blank(value), REQUIRED_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null))]
    #[case(json!(""))]
    #[case(json!(0))]
    #[case(json!(false))]
    fn blank_values_are_required(#[case] value: Value) {
        let outcome = not_empty(&value, &Params::new(), &Record::new()).unwrap();
        assert_eq!(outcome, Outcome::fail("Required"));
    }

    #[rstest]
    #[case(json!("john doe"))]
    #[case(json!(3))]
    #[case(json!(true))]
    fn present_values_pass(#[case] value: Value) {
        assert!(not_empty(&value, &Params::new(), &Record::new()).unwrap().is_pass());
    }
}
