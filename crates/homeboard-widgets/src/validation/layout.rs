//! Grid layout validation.

use serde_json::{Map, Value};

use super::helpers::{check_non_negative_number, check_optional_non_negative_number, check_required_string};
use super::result::{ErrorCode, ValidationResult};

/// Validate an untyped grid layout (a sequence of placement entries).
///
/// Entries are validated independently; duplicate ids and overlapping
/// placements are not detected here.
pub fn validate_grid_layout(layout: &Value) -> ValidationResult {
    let Some(entries) = layout.as_array() else {
        return ValidationResult::single("layout", "layout must be an array", ErrorCode::InvalidType);
    };

    let mut errors = Vec::new();
    let empty = Map::new();
    for (i, entry) in entries.iter().enumerate() {
        let obj = entry.as_object().unwrap_or(&empty);
        check_required_string(&mut errors, obj, "i", &format!("layout[{i}].i"));
        for key in ["x", "y", "w", "h"] {
            check_non_negative_number(&mut errors, obj, key, &format!("layout[{i}].{key}"));
        }
        for key in ["minW", "minH"] {
            check_optional_non_negative_number(&mut errors, obj, key, &format!("layout[{i}].{key}"));
        }
    }
    ValidationResult::from_errors(errors)
}
