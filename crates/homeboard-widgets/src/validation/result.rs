//! Validation outcome types shared by all validators.

use serde::Serialize;

/// Machine-readable category for a single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A mandatory value is missing entirely.
    Required,
    /// A value has the wrong primitive or structural type.
    InvalidType,
    /// A value has the right type but lies outside the allowed set or range.
    InvalidValue,
    /// A composite value is missing required sub-fields.
    InvalidStructure,
}

/// One field-level violation, addressed by dotted path
/// (e.g. `content.tasks[0].text`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: ErrorCode,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }
}

/// Outcome of a validation pass.
///
/// `is_valid` holds exactly when `errors` is empty. Errors keep the order in
/// which the checks ran (field declaration order) and are never de-duplicated.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// A valid result with no errors.
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Build a result from accumulated errors.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// A result holding exactly one error.
    pub fn single(
        field: impl Into<String>,
        message: impl Into<String>,
        code: ErrorCode,
    ) -> Self {
        Self::from_errors(vec![ValidationError::new(field, message, code)])
    }

    /// One-line `field: message` summary of all errors, for logs and
    /// notification bodies.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
