use thiserror::Error;

/// Errors raised when a request body is incomplete.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Fails with [`ValidationError::MissingField`] when `value` is empty or whitespace.
pub fn require_field(name: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(name));
    }
    Ok(())
}
