//! Field rules for person forms.
//!
//! Every field is checked independently and all failures are collected.
//! Length and pattern checks run on the raw value; only the "required"
//! check trims first.

use std::sync::LazyLock;

use regex::Regex;

use roster_core::{Field, FieldErrors};

use crate::person::PersonForm;

/// Maximum length of a first or last name, in characters.
pub const NAME_MAX_CHARS: usize = 50;

pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const PHONE_PATTERN: &str = r"^\+?[0-9\s\-()]{7,20}$";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"));

/// Validate a whole form.
pub fn validate(form: &PersonForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        if let Some(message) = check(field, form.get(field)) {
            errors.insert(field, message);
        }
    }
    errors.into_result()
}

/// Check one field value, returning the message for the first failed rule.
pub fn check(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::FirstName => check_name(
            value,
            "First name is required",
            "First name cannot exceed 50 characters",
        ),
        Field::LastName => check_name(
            value,
            "Last name is required",
            "Last name cannot exceed 50 characters",
        ),
        Field::Email => check_email(value),
        Field::Phone => check_phone(value),
        Field::Address => None,
    }
}

fn check_name(
    value: &str,
    required: &'static str,
    too_long: &'static str,
) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(required)
    } else if value.chars().count() > NAME_MAX_CHARS {
        Some(too_long)
    } else {
        None
    }
}

fn check_email(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("Email is required")
    } else if !EMAIL.is_match(value) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

fn check_phone(value: &str) -> Option<&'static str> {
    if !value.is_empty() && !PHONE.is_match(value) {
        Some("Please enter a valid phone number")
    } else {
        None
    }
}
