//! Shared field-check helpers used by all validators.
//!
//! Each helper appends at most one error per call, so callers control the
//! accumulation order by the order they run checks in.

use serde_json::{Map, Value};

use super::result::{ErrorCode, ValidationError};

/// Push an error unless `obj[key]` is a non-empty string.
pub(crate) fn check_required_string(
    errors: &mut Vec<ValidationError>,
    obj: &Map<String, Value>,
    key: &str,
    field: &str,
) {
    match obj.get(key).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => {}
        _ => errors.push(ValidationError::new(
            field,
            format!("{key} must be a non-empty string"),
            ErrorCode::InvalidType,
        )),
    }
}

/// Push an error if `obj[key]` is present and not a string.
pub(crate) fn check_optional_string(
    errors: &mut Vec<ValidationError>,
    obj: &Map<String, Value>,
    key: &str,
    field: &str,
) {
    if let Some(value) = obj.get(key) {
        if !value.is_string() {
            errors.push(ValidationError::new(
                field,
                format!("{key} must be a string"),
                ErrorCode::InvalidType,
            ));
        }
    }
}

/// Push an error if `obj[key]` is present and not a boolean.
pub(crate) fn check_optional_bool(
    errors: &mut Vec<ValidationError>,
    obj: &Map<String, Value>,
    key: &str,
    field: &str,
) {
    if let Some(value) = obj.get(key) {
        if !value.is_boolean() {
            errors.push(ValidationError::new(
                field,
                format!("{key} must be a boolean"),
                ErrorCode::InvalidType,
            ));
        }
    }
}

/// Push an error unless `obj[key]` is a number `>= 0`.
/// Non-numbers report `INVALID_TYPE`; negative numbers `INVALID_VALUE`.
pub(crate) fn check_non_negative_number(
    errors: &mut Vec<ValidationError>,
    obj: &Map<String, Value>,
    key: &str,
    field: &str,
) {
    match obj.get(key).and_then(Value::as_f64) {
        None => errors.push(ValidationError::new(
            field,
            format!("{key} must be a number"),
            ErrorCode::InvalidType,
        )),
        Some(n) if n < 0.0 => errors.push(ValidationError::new(
            field,
            format!("{key} must not be negative"),
            ErrorCode::InvalidValue,
        )),
        Some(_) => {}
    }
}

/// Like [`check_non_negative_number`], but absent keys pass.
pub(crate) fn check_optional_non_negative_number(
    errors: &mut Vec<ValidationError>,
    obj: &Map<String, Value>,
    key: &str,
    field: &str,
) {
    if obj.contains_key(key) {
        check_non_negative_number(errors, obj, key, field);
    }
}

/// Push an error if `obj[key]` is present and not a number `> 0`.
pub(crate) fn check_optional_positive_number(
    errors: &mut Vec<ValidationError>,
    obj: &Map<String, Value>,
    key: &str,
    field: &str,
) {
    if let Some(value) = obj.get(key) {
        match value.as_f64() {
            Some(n) if n > 0.0 => {}
            _ => errors.push(ValidationError::new(
                field,
                format!("{key} must be a number greater than 0"),
                ErrorCode::InvalidValue,
            )),
        }
    }
}

/// JavaScript-style truthiness for JSON values: null, `false`, `0`, and the
/// empty string are falsy; everything else is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn required_string_rejects_missing_empty_and_non_string() {
        for candidate in [json!({}), json!({"id": ""}), json!({"id": 7})] {
            let mut errors = Vec::new();
            check_required_string(&mut errors, &obj(candidate), "id", "id");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].code, ErrorCode::InvalidType);
        }
    }

    #[test]
    fn required_string_accepts_non_empty() {
        let mut errors = Vec::new();
        check_required_string(&mut errors, &obj(json!({"id": "w1"})), "id", "id");
        assert!(errors.is_empty());
    }

    #[test]
    fn optional_checks_pass_when_absent() {
        let mut errors = Vec::new();
        let empty = obj(json!({}));
        check_optional_string(&mut errors, &empty, "searchQuery", "content.searchQuery");
        check_optional_bool(&mut errors, &empty, "isRunning", "content.isRunning");
        check_optional_non_negative_number(&mut errors, &empty, "minW", "layout[0].minW");
        check_optional_positive_number(&mut errors, &empty, "gridCols", "settings.gridCols");
        assert!(errors.is_empty());
    }

    #[test]
    fn non_negative_number_splits_type_and_value_codes() {
        let mut errors = Vec::new();
        check_non_negative_number(&mut errors, &obj(json!({"x": "3"})), "x", "layout[0].x");
        assert_eq!(errors[0].code, ErrorCode::InvalidType);

        let mut errors = Vec::new();
        check_non_negative_number(&mut errors, &obj(json!({"x": -1})), "x", "layout[0].x");
        assert_eq!(errors[0].code, ErrorCode::InvalidValue);

        let mut errors = Vec::new();
        check_non_negative_number(&mut errors, &obj(json!({"x": 0})), "x", "layout[0].x");
        assert!(errors.is_empty());
    }

    #[test]
    fn positive_number_rejects_zero_and_wrong_type() {
        for candidate in [json!({"gridCols": 0}), json!({"gridCols": -2}), json!({"gridCols": "12"})] {
            let mut errors = Vec::new();
            check_optional_positive_number(&mut errors, &obj(candidate), "gridCols", "settings.gridCols");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].code, ErrorCode::InvalidValue);
        }
    }

    #[test]
    fn truthiness_matches_javascript() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("yellow")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
    }
}
