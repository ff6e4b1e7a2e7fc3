//! Client-side form validation
//!
//! Runs before a request is sent; violations surface as
//! [`Error::Validation`] tagged with the offending field so forms can
//! render them inline.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, FormField};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// Reject empty or malformed email addresses.
pub fn email(value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::validation(FormField::Email, "Email is required."));
    }
    if !EMAIL_RE.is_match(value) {
        return Err(Error::validation(
            FormField::Email,
            "Enter a valid email address.",
        ));
    }
    Ok(())
}

/// Registration password policy: at least eight characters with one
/// letter and one digit.
pub fn password(value: &str) -> Result<(), Error> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::validation(
            FormField::Password,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters."),
        ));
    }
    if !value.chars().any(|c| c.is_ascii_alphabetic()) || !value.chars().any(|c| c.is_ascii_digit())
    {
        return Err(Error::validation(
            FormField::Password,
            "Password must contain a letter and a digit.",
        ));
    }
    Ok(())
}

/// Reject an empty required field.
pub fn required(field: FormField, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, format!("{field} is required")));
    }
    Ok(())
}
