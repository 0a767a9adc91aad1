//! Custom validators, registry isolation and concurrent evaluation.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use sift_validator::prelude::*;
use tokio::sync::Barrier;

/// Waits until every participant has reached it, then passes.
struct Rendezvous {
    barrier: Arc<Barrier>,
}

#[async_trait]
impl Validator for Rendezvous {
    async fn evaluate(
        &self,
        _value: &Value,
        _params: &Params,
        _record: &Record,
    ) -> ValidatorResult<Outcome> {
        self.barrier.wait().await;
        Ok(Outcome::Pass)
    }
}

/// Records the order in which validators ran.
#[derive(Default)]
struct CallLog {
    entries: Mutex<Vec<&'static str>>,
}

impl CallLog {
    fn push(&self, entry: &'static str) {
        self.entries.lock().unwrap().push(entry);
    }

    fn entries(&self) -> Vec<&'static str> {
        self.entries.lock().unwrap().clone()
    }
}

/// Sleeps for `params.millis`, then passes.
struct Slow;

#[async_trait]
impl Validator for Slow {
    async fn evaluate(
        &self,
        _value: &Value,
        params: &Params,
        _record: &Record,
    ) -> ValidatorResult<Outcome> {
        let millis = params
            .get("millis")
            .and_then(Value::as_u64)
            .ok_or_else(|| ValidatorError::missing_param("slow", "millis"))?;
        tokio::time::sleep(Duration::from_millis(millis)).await;
        Ok(Outcome::Pass)
    }
}

#[tokio::test]
async fn fields_are_evaluated_concurrently() {
    // Each field blocks until all three have started, which only completes
    // if the fields run concurrently.
    let barrier = Arc::new(Barrier::new(3));
    let registry = ValidatorRegistry::new().with("rendezvous", Rendezvous { barrier });

    let rules = RuleSet::new()
        .field("a", [Rule::new("rendezvous")])
        .field("b", [Rule::new("rendezvous")])
        .field("c", [Rule::new("rendezvous"), Rule::new("notEmpty")]);

    let validation = RecordValidator::builder(Record::new().with("c", "x"), rules)
        .registry(registry)
        .timeout(Duration::from_secs(5))
        .build()
        .validate()
        .await
        .unwrap();

    assert_eq!(validation, Validation::Valid);
}

#[tokio::test]
async fn rules_within_a_field_run_in_order() {
    let seen = Arc::new(CallLog::default());
    let mut registry = ValidatorRegistry::new();
    for step in ["first", "second", "third"] {
        let seen = Arc::clone(&seen);
        registry.register_fn(step, move |_: &Value, _: &Params, _: &Record| {
            seen.push(step);
            Ok(Outcome::Pass)
        });
    }

    let rules = RuleSet::new().field(
        "x",
        [Rule::new("first"), Rule::new("second"), Rule::new("third")],
    );
    let validation = RecordValidator::builder(Record::new(), rules)
        .registry(registry)
        .build()
        .validate()
        .await
        .unwrap();

    assert_eq!(validation, Validation::Valid);
    assert_eq!(seen.entries(), ["first", "second", "third"]);
}

#[tokio::test]
async fn slow_field_times_out_as_distinct_error() {
    let registry = ValidatorRegistry::new().with("slow", Slow);
    let rules = RuleSet::new()
        .field("fast", [Rule::new("notEmpty")])
        .field("sluggish", [Rule::new("slow").param("millis", 5_000)]);

    let err = RecordValidator::builder(Record::new().with("fast", "ok"), rules)
        .registry(registry)
        .timeout(Duration::from_millis(20))
        .build()
        .validate()
        .await
        .unwrap_err();

    assert!(matches!(err, ValidatorError::Timeout { ref field, .. } if field == "sluggish"));
    assert!(!err.is_configuration());
}

#[tokio::test]
async fn async_validator_within_budget_completes() {
    let registry = ValidatorRegistry::new().with("slow", Slow);
    let rules = RuleSet::new().field(
        "name",
        [Rule::new("slow").param("millis", 1), Rule::new("notEmpty")],
    );

    let validation = RecordValidator::builder(Record::new(), rules)
        .registry(registry)
        .timeout(Duration::from_secs(5))
        .build()
        .validate()
        .await
        .unwrap();

    let expected: FieldErrors = [("name", "Required")].into_iter().collect();
    assert_eq!(validation, Validation::Invalid(expected));
}

#[tokio::test]
async fn overriding_a_builtin_changes_its_behaviour() {
    let mut registry = ValidatorRegistry::new();
    registry.register_fn("notEmpty", |value: &Value, _: &Params, _: &Record| {
        Ok(Outcome::check(value.as_str().is_some_and(|s| s.len() >= 3), "Too short"))
    });

    let rules = RuleSet::new().field("name", [Rule::new("notEmpty")]);
    let validation = RecordValidator::builder(Record::new().with("name", "jo"), rules)
        .registry(registry)
        .build()
        .validate()
        .await
        .unwrap();

    assert_eq!(validation.errors().and_then(|e| e.get("name")), Some("Too short"));
}

#[tokio::test]
async fn isolated_registry_does_not_see_global_additions() {
    add_validator_fn("registry_test_postcode", |value: &Value, _: &Params, _: &Record| {
        let ok = value
            .as_str()
            .is_some_and(|s| s.len() == 5 && s.chars().all(|c| c.is_ascii_digit()));
        Ok(Outcome::check(ok, "Invalid postcode"))
    });

    let rules = || RuleSet::new().field("zip", [Rule::new("registry_test_postcode")]);

    let global = RecordValidator::new(Record::new().with("zip", "1234"), rules());
    let validation = global.validate().await.unwrap();
    assert_eq!(validation.errors().and_then(|e| e.get("zip")), Some("Invalid postcode"));

    let isolated = RecordValidator::builder(Record::new().with("zip", "1234"), rules())
        .registry(ValidatorRegistry::new())
        .build();
    assert!(isolated.check_rules().is_err());
}

#[tokio::test]
async fn validator_reads_sibling_fields() {
    let mut registry = ValidatorRegistry::new();
    registry.register_fn("before", |value: &Value, params: &Params, record: &Record| {
        let other = params
            .get("field")
            .and_then(Value::as_str)
            .ok_or_else(|| ValidatorError::missing_param("before", "field"))?;
        let ok = match (value.as_i64(), record.resolve(other).as_i64()) {
            (Some(start), Some(end)) => start < end,
            _ => false,
        };
        Ok(Outcome::check(ok, format!("Must be before {other}")))
    });

    let rules = RuleSet::new().field("start", [Rule::new("before").param("field", "end")]);
    let record = Record::new().with("start", json!(10)).with("end", json!(5));

    let validation = RecordValidator::builder(record, rules)
        .registry(registry)
        .build()
        .validate()
        .await
        .unwrap();

    assert_eq!(
        validation.errors().and_then(|e| e.get("start")),
        Some("Must be before end")
    );
}

#[tokio::test]
async fn registry_counts_dispatches_once_per_rule() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let registry = {
        let mut registry = ValidatorRegistry::new();
        registry.register_fn("count", move |_: &Value, _: &Params, _: &Record| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Outcome::Pass)
        });
        registry
    };

    let rules = RuleSet::new()
        .field("a", [Rule::new("count"), Rule::new("count")])
        .field("b", [Rule::new("count")])
        .field("c", [Rule::new("notEmpty"), Rule::new("count")]);

    let validation = RecordValidator::builder(Record::new(), rules)
        .registry(registry)
        .build()
        .validate()
        .await
        .unwrap();

    assert_eq!(validation.errors().map(FieldErrors::len), Some(1));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
