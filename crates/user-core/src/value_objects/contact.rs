//! Email and age rules
//!
//! The email pattern is narrower than RFC 5322: lowercase only,
//! and the top-level label is 2-4 letters.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$").expect("email pattern is valid")
});

/// Youngest accepted age
pub const MIN_AGE: i16 = 1;

/// Oldest accepted age
pub const MAX_AGE: i16 = 150;

/// Check an email address against the accepted pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check an age against the accepted range (inclusive)
pub fn is_valid_age(age: i16) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}
