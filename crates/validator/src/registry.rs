//! Validator registry
//!
//! A [`ValidatorRegistry`] maps validator names to implementations. Rules
//! refer to validators by name only, so new validators plug in without
//! touching the engine.
//!
//! Registries are plain values: build one, register into it, then share it
//! behind an `Arc`. The process-wide registry used by default is published
//! through an `ArcSwap`; [`add_validator`] swaps in a new snapshot, and
//! validators built earlier keep the snapshot they were created with.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use serde_json::Value;
use tracing::debug;

use crate::builtin;
use crate::error::ValidatorResult;
use crate::outcome::Outcome;
use crate::record::Record;
use crate::traits::{FnValidator, Validator};
use crate::value::Params;

/// Name-addressed table of validators.
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: HashMap<String, Arc<dyn Validator>>,
}

impl ValidatorRegistry {
    /// Creates a registry holding the built-in validators.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        builtin::register_builtins(&mut registry);
        registry
    }

    /// Creates a registry with nothing registered.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers a validator. An existing entry with the same name is
    /// replaced.
    pub fn register<V>(&mut self, name: impl Into<String>, validator: V)
    where
        V: Validator + 'static,
    {
        self.register_arc(name, Arc::new(validator));
    }

    /// Registers a synchronous function as a validator.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&Value, &Params, &Record) -> ValidatorResult<Outcome> + Send + Sync + 'static,
    {
        self.register(name, FnValidator::new(func));
    }

    /// Registers an already shared validator.
    pub fn register_arc(&mut self, name: impl Into<String>, validator: Arc<dyn Validator>) {
        let name = name.into();
        if self.validators.insert(name.clone(), validator).is_some() {
            debug!(validator = %name, "replaced registered validator");
        } else {
            debug!(validator = %name, "registered validator");
        }
    }

    /// Builder-style [`ValidatorRegistry::register`].
    #[must_use = "builder methods must be chained or built"]
    pub fn with<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.register(name, validator);
        self
    }

    /// Removes a validator, returning it if it was registered.
    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn Validator>> {
        self.validators.remove(name)
    }

    /// Looks up a validator by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Validator>> {
        self.validators.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.validators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("validators", &self.names())
            .finish()
    }
}

// ============================================================================
// PROCESS-WIDE REGISTRY
// ============================================================================

static GLOBAL: LazyLock<ArcSwap<ValidatorRegistry>> =
    LazyLock::new(|| ArcSwap::from_pointee(ValidatorRegistry::new()));

/// Snapshot of the process-wide registry.
///
/// Starts with the built-ins; [`add_validator`] extends it.
pub fn global() -> Arc<ValidatorRegistry> {
    GLOBAL.load_full()
}

/// Registers a validator in the process-wide registry.
///
/// Validators constructed afterwards without an explicit registry see it.
/// Finish registering before validating: record validators already built
/// keep their earlier snapshot.
pub fn add_validator<V>(name: impl Into<String>, validator: V)
where
    V: Validator + 'static,
{
    let name = name.into();
    let validator: Arc<dyn Validator> = Arc::new(validator);
    GLOBAL.rcu(|current| {
        let mut next = ValidatorRegistry::clone(current);
        next.register_arc(name.clone(), Arc::clone(&validator));
        next
    });
}

/// Registers a synchronous function in the process-wide registry.
pub fn add_validator_fn<F>(name: impl Into<String>, func: F)
where
    F: Fn(&Value, &Params, &Record) -> ValidatorResult<Outcome> + Send + Sync + 'static,
{
    add_validator(name, FnValidator::new(func));
}
