//! The validator contract
//!
//! Every entry in a [`ValidatorRegistry`](crate::ValidatorRegistry) is an
//! `Arc<dyn Validator>`. The trait is async so validators may suspend (for
//! example to consult an external service), while the built-ins are plain
//! synchronous functions wrapped in [`FnValidator`].

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ValidatorResult;
use crate::outcome::Outcome;
use crate::record::Record;
use crate::value::Params;

/// A named, pluggable check over one field value.
///
/// `value` is the field's value (null when the field is absent), `params`
/// are the rule's parameters and `record` is the whole, already normalized
/// record for cross-field checks. Implementations must not have side effects
/// on the record or the registry.
///
/// Return `Ok(Outcome::Fail(..))` for data that does not satisfy the check;
/// reserve `Err` for unusable parameters.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use serde_json::Value;
/// use sift_validator::{Outcome, Params, Record, Validator, ValidatorResult};
///
/// struct Lowercase;
///
/// #[async_trait]
/// impl Validator for Lowercase {
///     async fn evaluate(
///         &self,
///         value: &Value,
///         _params: &Params,
///         _record: &Record,
///     ) -> ValidatorResult<Outcome> {
///         let ok = value.as_str().is_some_and(|s| s.chars().all(|c| !c.is_uppercase()));
///         Ok(Outcome::check(ok, "Must be lowercase"))
///     }
/// }
/// ```
#[async_trait]
pub trait Validator: Send + Sync {
    async fn evaluate(
        &self,
        value: &Value,
        params: &Params,
        record: &Record,
    ) -> ValidatorResult<Outcome>;
}

/// Adapts a synchronous function into a [`Validator`].
pub struct FnValidator<F> {
    func: F,
}

impl<F> FnValidator<F>
where
    F: Fn(&Value, &Params, &Record) -> ValidatorResult<Outcome> + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F> Validator for FnValidator<F>
where
    F: Fn(&Value, &Params, &Record) -> ValidatorResult<Outcome> + Send + Sync,
{
    async fn evaluate(
        &self,
        value: &Value,
        params: &Params,
        record: &Record,
    ) -> ValidatorResult<Outcome> {
        (self.func)(value, params, record)
    }
}

impl<F> std::fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}
