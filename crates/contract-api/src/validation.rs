//! Field-level rules for incoming payloads.
//!
//! Lengths are counted in characters, not bytes.

use thiserror::Error;

pub const ITEM_NAME_MAX: usize = 100;
pub const ITEM_DESCRIPTION_MAX: usize = 500;
pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 50;
pub const EMAIL_MAX: usize = 100;
pub const FULL_NAME_MAX: usize = 100;
pub const PASSWORD_MIN: usize = 8;

/// A single field that failed its rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(field, "field is required")
    }
}

type Result<T = ()> = std::result::Result<T, ValidationError>;

fn length_between(field: &'static str, value: &str, min: usize, max: usize) -> Result {
    let len = value.chars().count();
    if len == 0 && min > 0 {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if len < min {
        return Err(ValidationError::new(
            field,
            format!("must be at least {min} characters"),
        ));
    }
    if len > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

pub fn item_name(name: &str) -> Result {
    length_between("name", name, 1, ITEM_NAME_MAX)
}

pub fn item_description(description: &str) -> Result {
    length_between("description", description, 0, ITEM_DESCRIPTION_MAX)
}

pub fn username(username: &str) -> Result {
    length_between("username", username, USERNAME_MIN, USERNAME_MAX)?;
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ValidationError::new(
            "username",
            "may only contain letters, digits and underscores",
        ));
    }
    Ok(())
}

pub fn email(email: &str) -> Result {
    length_between("email", email, 1, EMAIL_MAX)?;
    let invalid = || ValidationError::new("email", "is not a valid email address");
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.split_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() && !domain.ends_with('.') => {
            Ok(())
        }
        _ => Err(invalid()),
    }
}

pub fn full_name(full_name: &str) -> Result {
    length_between("fullName", full_name, 0, FULL_NAME_MAX)
}

pub fn password(password: &str) -> Result {
    let len = password.chars().count();
    if len < PASSWORD_MIN {
        return Err(ValidationError::new(
            "password",
            format!("must be at least {PASSWORD_MIN} characters"),
        ));
    }
    Ok(())
}
