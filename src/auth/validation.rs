/**
 * Registration Input Validation
 *
 * This module implements the validation rules applied to registration
 * requests. Rules are checked in a fixed order and validation stops at
 * the first failure, so the client always receives the message for the
 * first rule that was broken.
 *
 * # Rules
 *
 * 1. Username: 3-20 characters, alphanumeric only
 * 2. Email: basic `local@domain.tld` shape
 * 3. Password: at least 8 characters with at least one lowercase letter,
 *    one uppercase letter, and one digit
 * 4. Password confirmation must match the password
 */
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ApiError;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("username regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Validate a username
///
/// Usernames must be 3-20 characters long and contain only ASCII
/// letters and digits.
pub fn validate_username(username: &str) -> Result<(), ApiError> {
    if username.len() < 3 || username.len() > 20 || !USERNAME_RE.is_match(username) {
        return Err(ApiError::validation(
            "Username must be 3-20 characters long and alphanumeric",
        ));
    }
    Ok(())
}

/// Validate an email address
///
/// Only the basic `local@domain.tld` shape is checked; deliverability
/// is out of scope.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    if !EMAIL_RE.is_match(email) {
        return Err(ApiError::validation("Invalid email address"));
    }
    Ok(())
}

/// Validate a password
///
/// Passwords must be at least 8 characters long and contain at least one
/// lowercase letter, one uppercase letter, and one digit. The regex
/// crate has no lookahead, so the character-class requirements are
/// checked directly.
pub fn validate_password(password: &str) -> Result<(), ApiError> {
    let long_enough = password.len() >= 8;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(long_enough && has_lower && has_upper && has_digit) {
        return Err(ApiError::validation(
            "Password must be at least 8 characters long and contain at least one uppercase letter, one lowercase letter, and one number",
        ));
    }
    Ok(())
}

/// Validate a full registration request, stopping at the first failure
///
/// The order is fixed: username, email, password, confirmation.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ApiError> {
    validate_username(username)?;
    validate_email(email)?;
    validate_password(password)?;

    if password != confirm_password {
        return Err(ApiError::validation("Passwords do not match"));
    }
    Ok(())
}
