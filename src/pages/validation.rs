//! Draft checks applied before anything is sent or stored.

use crate::error::ActionError;

/// Reject empty or whitespace-only input; returns the trimmed text.
pub fn require_non_blank<'a>(field: &str, value: &'a str) -> Result<&'a str, ActionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ActionError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed)
}
