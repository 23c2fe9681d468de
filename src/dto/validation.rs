//! Field-level validation of incoming payloads.
//!
//! Rules are pure functions returning the full list of violations, so a caller can report every
//! problem in one response.

use serde::Serialize;

/// Longest accepted name, in characters.
pub const NAME_MAX_LEN: usize = 100;

/// One rule violation on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// `name` must be present, not blank, and at most [`NAME_MAX_LEN`] characters.
pub fn validate_name(name: Option<&str>) -> Vec<FieldViolation> {
    let Some(name) = name else {
        return vec![FieldViolation::new("name", "NotNull", "name is required")];
    };
    let mut violations = Vec::new();
    if name.trim().is_empty() {
        violations.push(FieldViolation::new(
            "name",
            "NotBlank",
            "name must not be blank",
        ));
    }
    if name.chars().count() > NAME_MAX_LEN {
        violations.push(FieldViolation::new(
            "name",
            "Size",
            format!("name must be at most {NAME_MAX_LEN} characters"),
        ));
    }
    violations
}
