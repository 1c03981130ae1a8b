//! Per-kind content validation.
//!
//! Every function here checks only fields its kind owns; fields that are
//! absent pass. The functions are registered in the widget-kind registry
//! and dispatched through [`validate_widget_content`].

use serde_json::{Map, Value};

use crate::registry;

use super::helpers::{
    check_optional_bool, check_optional_positive_number, check_optional_string,
    check_required_string, is_truthy,
};
use super::result::{ErrorCode, ValidationError, ValidationResult};

/// Validate a widget's content payload against its kind's rules.
///
/// Kinds without a registry entry have no content rules, so their result is
/// always valid (the widget set is open).
pub fn validate_widget_content(kind: &str, content: &Value) -> ValidationResult {
    let mut errors = Vec::new();
    if let Some(spec) = registry::lookup(kind) {
        (spec.validate_content)(content, &mut errors);
    }
    ValidationResult::from_errors(errors)
}

pub(crate) fn validate_clock(content: &Value, errors: &mut Vec<ValidationError>) {
    let Some(obj) = content.as_object() else {
        return;
    };
    if let Some(format) = obj.get("format") {
        if !matches!(format.as_str(), Some("12h") | Some("24h")) {
            errors.push(ValidationError::new(
                "content.format",
                "format must be '12h' or '24h'",
                ErrorCode::InvalidValue,
            ));
        }
    }
    check_optional_bool(errors, obj, "showDate", "content.showDate");
}

pub(crate) fn validate_todo(content: &Value, errors: &mut Vec<ValidationError>) {
    let Some(obj) = content.as_object() else {
        return;
    };
    let Some(tasks) = obj.get("tasks") else {
        return;
    };
    let Some(tasks) = tasks.as_array() else {
        errors.push(ValidationError::new(
            "content.tasks",
            "tasks must be an array",
            ErrorCode::InvalidType,
        ));
        return;
    };

    let empty = Map::new();
    for (i, task) in tasks.iter().enumerate() {
        let task = task.as_object().unwrap_or(&empty);
        check_required_string(errors, task, "id", &format!("content.tasks[{i}].id"));
        check_required_string(errors, task, "text", &format!("content.tasks[{i}].text"));
        if !task.get("completed").map(Value::is_boolean).unwrap_or(false) {
            errors.push(ValidationError::new(
                format!("content.tasks[{i}].completed"),
                "completed must be a boolean",
                ErrorCode::InvalidType,
            ));
        }
    }
}

pub(crate) fn validate_sticky_note(content: &Value, errors: &mut Vec<ValidationError>) {
    let Some(obj) = content.as_object() else {
        return;
    };
    check_optional_string(errors, obj, "content", "content.content");
    if let Some(color) = obj.get("color") {
        let well_formed = color
            .as_object()
            .map(|c| {
                is_truthy(c.get("name").unwrap_or(&Value::Null))
                    && is_truthy(c.get("gradient").unwrap_or(&Value::Null))
            })
            .unwrap_or(false);
        if !well_formed {
            errors.push(ValidationError::new(
                "content.color",
                "color must include name and gradient",
                ErrorCode::InvalidStructure,
            ));
        }
    }
}

pub(crate) fn validate_pomodoro(content: &Value, errors: &mut Vec<ValidationError>) {
    let Some(obj) = content.as_object() else {
        return;
    };
    check_optional_positive_number(errors, obj, "workDuration", "content.workDuration");
    check_optional_positive_number(errors, obj, "breakDuration", "content.breakDuration");
    check_optional_bool(errors, obj, "isRunning", "content.isRunning");
}

pub(crate) fn validate_kanban(content: &Value, errors: &mut Vec<ValidationError>) {
    let Some(obj) = content.as_object() else {
        return;
    };
    if let Some(columns) = obj.get("columns") {
        match columns.as_array() {
            None => errors.push(ValidationError::new(
                "content.columns",
                "columns must be an array",
                ErrorCode::InvalidType,
            )),
            Some(columns) => {
                let empty = Map::new();
                for (i, column) in columns.iter().enumerate() {
                    let column = column.as_object().unwrap_or(&empty);
                    check_required_string(errors, column, "id", &format!("content.columns[{i}].id"));
                    check_required_string(
                        errors,
                        column,
                        "title",
                        &format!("content.columns[{i}].title"),
                    );
                    if let Some(tasks) = column.get("tasks") {
                        if !tasks.is_array() {
                            errors.push(ValidationError::new(
                                format!("content.columns[{i}].tasks"),
                                "tasks must be an array",
                                ErrorCode::InvalidType,
                            ));
                        }
                    }
                }
            }
        }
    }
    check_optional_string(errors, obj, "searchQuery", "content.searchQuery");
}
