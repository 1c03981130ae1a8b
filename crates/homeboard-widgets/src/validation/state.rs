//! Whole-document validation for a persisted dashboard state.

use serde_json::{Map, Value};

use super::helpers::check_optional_positive_number;
use super::layout::validate_grid_layout;
use super::result::{ErrorCode, ValidationError, ValidationResult};
use super::widget::validate_widget;

/// Validate an untyped dashboard state document.
///
/// Layout entries and widget records are validated independently; no check
/// ties `layout[].i` to the keys of `widgets`. Widget errors come back
/// re-prefixed with `widgets.<id>.` so a caller can attribute them.
pub fn validate_dashboard_state(state: &Value) -> ValidationResult {
    if state.is_null() {
        return ValidationResult::single("state", "dashboard state is required", ErrorCode::Required);
    }

    let empty = Map::new();
    let obj = state.as_object().unwrap_or(&empty);
    let mut errors = Vec::new();

    if let Some(layout) = obj.get("layout") {
        errors.extend(validate_grid_layout(layout).errors);
    }

    match obj.get("widgets").and_then(Value::as_object) {
        None => errors.push(ValidationError::new(
            "widgets",
            "widgets must be an object",
            ErrorCode::InvalidType,
        )),
        Some(widgets) => {
            for (id, widget) in widgets {
                for mut error in validate_widget(widget).errors {
                    error.field = format!("widgets.{id}.{}", error.field);
                    errors.push(error);
                }
            }
        }
    }

    if let Some(settings) = obj.get("settings").and_then(Value::as_object) {
        if let Some(theme) = settings.get("theme") {
            if !matches!(theme.as_str(), Some("light") | Some("dark")) {
                errors.push(ValidationError::new(
                    "settings.theme",
                    "theme must be 'light' or 'dark'",
                    ErrorCode::InvalidValue,
                ));
            }
        }
        check_optional_positive_number(&mut errors, settings, "gridCols", "settings.gridCols");
        check_optional_positive_number(
            &mut errors,
            settings,
            "gridRowHeight",
            "settings.gridRowHeight",
        );
    }

    ValidationResult::from_errors(errors)
}
