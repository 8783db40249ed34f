//! Profile validation rules.
//!
//! This module validates a profile before any check runs:
//! - Extension names must be non-empty printable text (`Zend OPcache` has a space)
//! - Ini keys and constant names must be identifiers
//! - Labels and the title must not be empty
//! - A connection needs a driver, a host and a database

use crate::config::schema::CheckProfile;
use crate::error::{EnvCheckError, Result};
use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.]*$").expect("valid identifier regex"));

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a profile and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_profile(profile: &CheckProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if profile.title.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-title",
            "Profile title must not be empty".to_string(),
        ));
    }

    errors.extend(validate_extensions(profile));
    errors.extend(validate_ini_keys(profile));
    errors.extend(validate_connection(profile));

    errors
}

fn validate_extensions(profile: &CheckProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for ext in &profile.extensions {
        if !is_extension_name(&ext.name) {
            errors.push(ValidationError::new(
                "invalid-extension",
                format!("Extension name '{}' is empty or not printable", ext.name),
            ));
        }
        if ext.label.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-label",
                format!("Extension '{}' has an empty label", ext.name),
            ));
        }
        for detail in &ext.details {
            if !IDENTIFIER.is_match(&detail.constant) {
                errors.push(ValidationError::new(
                    "invalid-constant",
                    format!(
                        "Constant '{}' of extension '{}' is not a valid identifier",
                        detail.constant, ext.name
                    ),
                ));
            }
        }
    }

    errors
}

fn is_extension_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.chars().any(char::is_control)
}

fn validate_ini_keys(profile: &CheckProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for key in profile.ini_keys() {
        if !IDENTIFIER.is_match(&key) {
            errors.push(ValidationError::new(
                "invalid-ini-key",
                format!("Ini key '{}' is not a valid directive name", key),
            ));
        }
    }

    for setting in &profile.settings {
        if setting.label.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-label",
                format!("Setting '{}' has an empty label", setting.key),
            ));
        }
    }

    errors
}

fn validate_connection(profile: &CheckProfile) -> Vec<ValidationError> {
    let Some(conn) = &profile.connection else {
        return Vec::new();
    };

    [
        ("driver", &conn.driver),
        ("host", &conn.host),
        ("database", &conn.database),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| {
        ValidationError::new(
            "incomplete-connection",
            format!("Connection {} must not be empty", field),
        )
    })
    .collect()
}

/// Validate a profile, failing on the first error.
pub fn validate(profile: &CheckProfile) -> Result<()> {
    match validate_profile(profile).into_iter().next() {
        Some(err) => Err(EnvCheckError::ConfigValidationError {
            message: err.message,
        }),
        None => Ok(()),
    }
}
