//! Input Validation
//!
//! A small rule-based validator for submitted records. Rules never fail
//! fast: every failing rule records a `(field, message)` pair and the caller
//! inspects the full set once all rules have run.
//!
//! # Usage
//!
//! ```rust
//! use movie_catalog::shared::validator::Validator;
//!
//! let mut v = Validator::new();
//! v.is_email("email", "not-an-email");
//! v.is_valid_password("password", "short");
//! assert!(!v.valid());
//! assert_eq!(v.errors().len(), 2);
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum password length in characters
pub const PASSWORD_MIN_LEN: usize = 8;

/// bcrypt only looks at the first 72 bytes of its input
pub const PASSWORD_MAX_LEN: usize = 72;

/// Full name length bounds, inclusive
pub const FULL_NAME_MIN_LEN: usize = 5;
pub const FULL_NAME_MAX_LEN: usize = 55;

static EMAIL_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern is a valid regex")
});

/// Accumulates per-field validation errors
#[derive(Debug, Default, Clone)]
pub struct Validator {
    errors: BTreeMap<String, String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no rule has failed so far
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record an error for `field`
    ///
    /// Only the first message per field is kept.
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Record `message` for `field` unless `ok` holds
    pub fn check(&mut self, ok: bool, field: &str, message: impl Into<String>) -> bool {
        if !ok {
            self.add_error(field, message);
        }
        ok
    }

    /// All accumulated errors keyed by field
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }

    pub fn required(&mut self, field: &str, value: &str) -> bool {
        self.check(is_present(value), field, "this field cannot be blank")
    }

    pub fn is_length(&mut self, field: &str, value: &str, min: usize, max: usize) -> bool {
        self.check(
            has_length(value, min, max),
            field,
            format!("must be between {} and {} characters long", min, max),
        )
    }

    pub fn is_email(&mut self, field: &str, value: &str) -> bool {
        self.check(is_email_address(value), field, "invalid email address")
    }

    pub fn is_valid_password(&mut self, field: &str, value: &str) -> bool {
        self.check(
            is_strong_password(value),
            field,
            format!(
                "password must be {} to {} characters and contain at least one letter and one digit",
                PASSWORD_MIN_LEN, PASSWORD_MAX_LEN
            ),
        )
    }

    pub fn is_valid_full_name(&mut self, field: &str, value: &str) -> bool {
        self.check(
            is_full_name(value),
            field,
            "name may only contain letters, spaces, apostrophes, hyphens and dots",
        )
    }
}

/// Non-empty after trimming
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Character count within `min..=max`
pub fn has_length(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

pub fn is_email_address(value: &str) -> bool {
    value.len() <= 254 && EMAIL_RX.is_match(value)
}

/// Length bounds plus at least one letter and one digit
pub fn is_strong_password(value: &str) -> bool {
    let has_letter = value.chars().any(|c| c.is_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    has_length(value, PASSWORD_MIN_LEN, PASSWORD_MAX_LEN)
        && value.len() <= PASSWORD_MAX_LEN
        && has_letter
        && has_digit
}

/// Letters plus `' -.`, starting with a letter
pub fn is_full_name(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphabetic() || matches!(c, ' ' | '\'' | '-' | '.'))
}
