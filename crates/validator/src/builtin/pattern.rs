//! Pattern validators: `regexp`, `email` and `url`.
//!
//! Null and structured values never match. Numbers and booleans are matched
//! against their JSON spelling.

use std::collections::HashMap;
use std::sync::LazyLock;

use async_trait::async_trait;
use parking_lot::RwLock;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

use super::{
    INVALID_EMAIL_MESSAGE, INVALID_URL_MESSAGE, INVALID_VALUE_MESSAGE, REGEXP, optional_str_param,
    str_param,
};
use crate::error::{ValidatorError, ValidatorResult};
use crate::outcome::Outcome;
use crate::record::Record;
use crate::traits::Validator;
use crate::value::{Params, scalar_text};

// ============================================================================
// EMAIL
// ============================================================================

/// Non-ASCII code points allowed in atoms and domain labels.
const UCS: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

/// RFC 2822 derived grammar: a dot-atom or quoted-string local part, then a
/// dotted domain whose last label starts and ends with a letter.
const EMAIL_TEMPLATE: &str = concat!(
    r"^(?:",
    // dot-atom
    r"(?:[a-zA-Z0-9!#$%&'*+\-/=?^_`{|}~<U>]+(?:\.[a-zA-Z0-9!#$%&'*+\-/=?^_`{|}~<U>]+)*)",
    r"|",
    // quoted-string with optional folding whitespace
    r"(?:\x22(?:(?:(?:[ \t]*\r\n)?[ \t]+)?",
    r"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x7f\x21\x23-\x5b\x5d-\x7e<U>]|\\[\x01-\x09\x0b\x0c\x0d-\x7f<U>]))*",
    r"(?:(?:[ \t]*\r\n)?[ \t]+)?\x22)",
    r")@",
    // domain labels
    r"(?:(?:[a-zA-Z0-9<U>]|[a-zA-Z0-9<U>][a-zA-Z0-9\-._~<U>]*[a-zA-Z0-9<U>])\.)+",
    // top-level label
    r"(?:[a-zA-Z<U>]|[a-zA-Z<U>][a-zA-Z0-9\-._~<U>]*[a-zA-Z<U>])$",
);

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(&EMAIL_TEMPLATE.replace("<U>", UCS))
        .size_limit(1 << 24)
        .build()
        .expect("email pattern is valid")
});

/// `email`: passes for addresses matching the RFC 2822 derived grammar.
pub fn email(value: &Value, _params: &Params, _record: &Record) -> ValidatorResult<Outcome> {
    let ok = scalar_text(value).is_some_and(|text| EMAIL_REGEX.is_match(&text));
    Ok(Outcome::check(ok, INVALID_EMAIL_MESSAGE))
}

// ============================================================================
// URL
// ============================================================================

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(concat!(
        r"^(?:https?://)?",
        // domain name or IPv4 address
        r"(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])*\.)+[a-z]{2,}|(?:[0-9]{1,3}\.){3}[0-9]{1,3})",
        // port and path
        r"(?::[0-9]+)?(?:/[-a-z0-9%_.~+]*)*",
        // query
        r"(?:\?[;&a-z0-9%_.~+=-]*)?",
        // fragment
        r"(?:#[-a-z0-9_]*)?$",
    ))
    .case_insensitive(true)
    .unicode(false)
    .build()
    .expect("url pattern is valid")
});

/// `url`: passes for http(s) URLs; the scheme is optional and the host is a
/// domain name or an IPv4 address.
pub fn url(value: &Value, _params: &Params, _record: &Record) -> ValidatorResult<Outcome> {
    let ok = scalar_text(value).is_some_and(|text| URL_REGEX.is_match(&text));
    Ok(Outcome::check(ok, INVALID_URL_MESSAGE))
}

// ============================================================================
// REGEXP
// ============================================================================

/// `regexp`: passes when `params.regexp` finds a match in the value.
///
/// `params.flags` may hold any of `i` (case-insensitive), `m` (multi-line)
/// and `s` (dot matches newline). Compiled patterns are cached per
/// pattern/flags pair for the lifetime of the validator.
#[derive(Debug, Default)]
pub struct RegexpValidator {
    cache: RwLock<HashMap<(String, String), Regex>>,
}

impl RegexpValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn compiled(&self, pattern: &str, flags: &str) -> ValidatorResult<Regex> {
        if let Some(other) = flags.chars().find(|flag| !matches!(flag, 'i' | 'm' | 's')) {
            return Err(ValidatorError::invalid_param(
                REGEXP,
                "flags",
                format!("unsupported flag '{other}'"),
            ));
        }

        let key = (flags.to_owned(), pattern.to_owned());
        if let Some(regex) = self.cache.read().get(&key) {
            return Ok(regex.clone());
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map_err(|err| ValidatorError::invalid_param(REGEXP, "regexp", err.to_string()))?;

        self.cache.write().insert(key, regex.clone());
        Ok(regex)
    }

    /// Number of distinct compiled patterns held.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.read().len()
    }
}

#[async_trait]
impl Validator for RegexpValidator {
    async fn evaluate(
        &self,
        value: &Value,
        params: &Params,
        _record: &Record,
    ) -> ValidatorResult<Outcome> {
        let pattern = str_param(params, REGEXP, "regexp")?;
        let flags = optional_str_param(params, REGEXP, "flags")?.unwrap_or_default();
        let regex = self.compiled(pattern, flags)?;

        let ok = scalar_text(value).is_some_and(|text| regex.is_match(&text));
        Ok(Outcome::check(ok, INVALID_VALUE_MESSAGE))
    }
}
