//! Whole-widget record validation.

use serde_json::{Map, Value};

use super::content::validate_widget_content;
use super::helpers::check_required_string;
use super::result::{ErrorCode, ValidationError, ValidationResult};

/// Validate an untyped widget record.
///
/// All field checks run independently; nothing short-circuits except a null
/// candidate. When the record carries both a `type` tag and a `content`
/// payload, the kind's content rules run too and their errors are appended
/// with their field paths as given.
pub fn validate_widget(candidate: &Value) -> ValidationResult {
    if candidate.is_null() {
        return ValidationResult::single("widget", "widget is required", ErrorCode::Required);
    }

    let empty = Map::new();
    let obj = candidate.as_object().unwrap_or(&empty);
    let mut errors = Vec::new();

    check_required_string(&mut errors, obj, "id", "id");
    check_required_string(&mut errors, obj, "type", "type");

    if !obj.get("config").map(Value::is_object).unwrap_or(false) {
        errors.push(ValidationError::new(
            "config",
            "config must be an object",
            ErrorCode::InvalidType,
        ));
    }

    for key in ["createdAt", "updatedAt"] {
        if obj.get(key).and_then(Value::as_f64).is_none() {
            errors.push(ValidationError::new(
                key,
                format!("{key} must be a valid timestamp"),
                ErrorCode::InvalidType,
            ));
        }
    }

    if let (Some(kind), Some(content)) = (obj.get("type").and_then(Value::as_str), obj.get("content")) {
        errors.extend(validate_widget_content(kind, content).errors);
    }

    ValidationResult::from_errors(errors)
}
