//! Owned plant input rules.

use crate::error::CoreError;

/// Maximum length of a user identifier.
pub const MAX_USER_ID_LENGTH: usize = 128;

/// Maximum number of plants returned by a single listing.
pub const MAX_PLANTS_PER_LIST: i64 = 1000;

/// Reject values that are empty or only whitespace.
pub fn validate_not_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate that a required text field is non-blank and within `max` characters.
pub fn validate_required_text(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    validate_not_blank(field, value)?;
    validate_max_length(field, value, max)
}

/// Validate that a text field is at most `max` characters long.
pub fn validate_max_length(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

pub fn validate_user_id(user_id: &str) -> Result<(), CoreError> {
    validate_required_text("user_id", user_id, MAX_USER_ID_LENGTH)
}
