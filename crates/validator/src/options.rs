//! Options controlling normalization and evaluation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValidatorResult;

/// Options for a [`RecordValidator`](crate::RecordValidator).
///
/// Missing keys take their defaults when deserializing, so `{}` is a valid
/// options document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Trim leading and trailing whitespace from string fields before any
    /// rule runs.
    pub trim: bool,

    /// Per-field evaluation budget in milliseconds. `None` waits for every
    /// field to finish.
    pub timeout_ms: Option<u64>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            trim: true,
            timeout_ms: None,
        }
    }
}

impl ValidationOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Sets the per-field budget. Budgets are kept in whole milliseconds,
    /// rounded up, so any non-zero budget stays non-zero.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_timeout(mut self, after: Duration) -> Self {
        let millis = after.as_nanos().div_ceil(1_000_000);
        self.timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    /// Per-field budget as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Parses options from JSON.
    pub fn from_json(json: &str) -> ValidatorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
