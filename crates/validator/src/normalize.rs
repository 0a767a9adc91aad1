//! One-shot normalization applied before any rule sees the record.

use serde_json::Value;

use crate::options::ValidationOptions;
use crate::record::Record;

/// Applies the normalization passes enabled in `options` to `record`.
///
/// Returns the number of fields that changed.
pub(crate) fn normalize(record: &mut Record, options: &ValidationOptions) -> usize {
    if !options.trim {
        return 0;
    }

    let mut changed = 0;
    for value in record.values_mut() {
        if let Value::String(s) = value {
            let trimmed = s.trim();
            if trimmed.len() != s.len() {
                *s = trimmed.to_owned();
                changed += 1;
            }
        }
    }
    changed
}
