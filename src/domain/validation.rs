//! Field validation rules.
//!
//! Pure functions, invoked explicitly before any entity is built or written.
//! Each returns the accepted (possibly normalized) value or a `ValidationError`.

use thiserror::Error;

use super::Strength;
use crate::config::MIN_DESCRIPTION_LENGTH;

pub const STRENGTH_REQUIRED: &str = "Strength must be provided.";
pub const HERO_ID_REQUIRED: &str = "Hero ID must be provided.";
pub const POWER_ID_REQUIRED: &str = "Power ID must be provided.";
pub const DESCRIPTION_REQUIRED: &str = "A description is required.";

/// A single violated field constraint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Unwrap a mandatory field, naming it when absent.
pub fn require<T>(
    value: Option<T>,
    field: &'static str,
    message: &'static str,
) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::new(field, message))
}

/// Accept exactly one of the allowed strength literals.
pub fn validate_strength(value: &str) -> Result<Strength, ValidationError> {
    value.parse()
}

/// Trim a required text field (hero name, alias, power name); it must not be blank.
pub fn validate_name(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::new(field, format!("{} must not be empty.", field)));
    }

    Ok(trimmed.to_string())
}

/// Trim a power description and check its minimum length.
///
/// Returns the trimmed text, which is what gets stored.
pub fn validate_description(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.chars().count() < MIN_DESCRIPTION_LENGTH {
        return Err(ValidationError::new(
            "description",
            format!(
                "Description must be at least {} characters.",
                MIN_DESCRIPTION_LENGTH
            ),
        ));
    }

    Ok(trimmed.to_string())
}
