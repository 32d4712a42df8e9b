use thiserror::Error;

/// A rejected input value. `field` names the offending input so a UI can point at it,
/// e.g. `items[3].quantity` or `vatPct`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for `{field}`: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a required text field left blank.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "a value is required")
    }
}

/// Rejects `None`, empty, and whitespace-only strings.
pub fn require_text(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::missing(field)),
    }
}
