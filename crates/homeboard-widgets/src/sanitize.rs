//! HTML-entity escaping of user-supplied content fields.
//!
//! Sanitization runs before user text is rendered as markup. Only kinds
//! whose content carries free text (todo, sticky-note, kanban) escape
//! anything; every other kind returns an unmodified copy. The input value
//! is never mutated.

use serde_json::{Map, Value};
use tracing::debug;

use crate::registry;

/// Escape HTML-sensitive characters in user text.
///
/// The replacement table covers `<`, `>`, `"`, `'`, and `/`. `&` is left
/// alone, so entities already present in stored text survive unchanged and
/// cannot be told apart from this function's own output.
pub fn escape_text(input: &str) -> String {
    input
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('/', "&#x2F;")
}

/// Return an escaped copy of a widget's content payload.
///
/// Non-object content comes back unchanged, as does content of a kind with
/// no registered sanitizer.
pub fn sanitize_widget_content(kind: &str, content: &Value) -> Value {
    if !content.is_object() {
        return content.clone();
    }
    match registry::lookup(kind) {
        Some(spec) => (spec.sanitize_content)(content),
        None => {
            debug!(kind, "no sanitizer registered for widget kind");
            content.clone()
        }
    }
}

/// Sanitizer for kinds whose content carries no user markup.
pub(crate) fn passthrough(content: &Value) -> Value {
    content.clone()
}

fn escape_field(obj: &mut Map<String, Value>, key: &str) {
    if let Some(Value::String(text)) = obj.get_mut(key) {
        *text = escape_text(text);
    }
}

pub(crate) fn sanitize_todo(content: &Value) -> Value {
    let mut out = content.clone();
    if let Some(tasks) = out.get_mut("tasks").and_then(Value::as_array_mut) {
        for task in tasks {
            if let Some(task) = task.as_object_mut() {
                escape_field(task, "text");
            }
        }
    }
    out
}

pub(crate) fn sanitize_sticky_note(content: &Value) -> Value {
    let mut out = content.clone();
    if let Some(obj) = out.as_object_mut() {
        escape_field(obj, "content");
    }
    out
}

pub(crate) fn sanitize_kanban(content: &Value) -> Value {
    let mut out = content.clone();
    let Some(obj) = out.as_object_mut() else {
        return out;
    };
    escape_field(obj, "searchQuery");
    escape_field(obj, "assigneeFilter");

    let Some(columns) = obj.get_mut("columns").and_then(Value::as_array_mut) else {
        return out;
    };
    for column in columns {
        let Some(column) = column.as_object_mut() else {
            continue;
        };
        escape_field(column, "title");
        let Some(tasks) = column.get_mut("tasks").and_then(Value::as_array_mut) else {
            continue;
        };
        for task in tasks {
            let Some(task) = task.as_object_mut() else {
                continue;
            };
            escape_field(task, "title");
            escape_field(task, "description");
            if let Some(assignee) = task.get_mut("assignee").and_then(Value::as_object_mut) {
                escape_field(assignee, "name");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn escape_table_covers_five_characters() {
        assert_eq!(escape_text("<>\"'/"), "&lt;&gt;&quot;&#x27;&#x2F;");
        assert_eq!(escape_text("plain text"), "plain text");
    }

    #[test]
    fn ampersand_is_not_escaped() {
        assert_eq!(escape_text("a & b"), "a & b");
        // Pins the escape-table gap: entities arriving in stored text keep
        // their `&` and are indistinguishable from our own output, so
        // "&amp;lt;" and "&lt;" both survive a re-escape unchanged.
        assert_eq!(escape_text("&amp;lt;"), "&amp;lt;");
        let once = escape_text("<b>");
        assert_eq!(once, "&lt;b&gt;");
        assert_eq!(escape_text(&once), once);
    }

    #[test]
    fn todo_task_text_is_escaped() {
        let content = json!({"tasks": [
            {"id": "1", "text": "<script>alert(\"xss\")</script>Task 1", "completed": false},
        ]});
        let clean = sanitize_widget_content("todo", &content);
        assert_eq!(
            clean["tasks"][0]["text"],
            "&lt;script&gt;alert(&quot;xss&quot;)&lt;&#x2F;script&gt;Task 1"
        );
        assert_eq!(clean["tasks"][0]["id"], "1");
        // Input untouched
        assert!(content["tasks"][0]["text"].as_str().unwrap().contains("<script>"));
    }

    #[test]
    fn sticky_note_body_is_escaped() {
        let clean = sanitize_widget_content("sticky-note", &json!({"content": "<img src=x>"}));
        assert_eq!(clean["content"], "&lt;img src=x&gt;");
    }

    #[test]
    fn kanban_escapes_all_text_fields() {
        let content = json!({
            "columns": [{
                "id": "todo",
                "title": "<To Do>",
                "tasks": [{
                    "id": "t1",
                    "title": "Fix <div>",
                    "description": "it's \"broken\"",
                    "assignee": {"name": "O'Brien"},
                }],
            }],
            "searchQuery": "<q>",
            "assigneeFilter": "a/b",
        });
        let clean = sanitize_widget_content("kanban", &content);
        assert_eq!(clean["columns"][0]["title"], "&lt;To Do&gt;");
        assert_eq!(clean["columns"][0]["tasks"][0]["title"], "Fix &lt;div&gt;");
        assert_eq!(
            clean["columns"][0]["tasks"][0]["description"],
            "it&#x27;s &quot;broken&quot;"
        );
        assert_eq!(clean["columns"][0]["tasks"][0]["assignee"]["name"], "O&#x27;Brien");
        assert_eq!(clean["searchQuery"], "&lt;q&gt;");
        assert_eq!(clean["assigneeFilter"], "a&#x2F;b");
    }

    #[test]
    fn kinds_without_text_fields_pass_through() {
        let content = json!({"format": "<24h>", "showDate": true});
        assert_eq!(sanitize_widget_content("clock", &content), content);

        let content = json!({"workDuration": 25, "isRunning": false});
        assert_eq!(sanitize_widget_content("pomodoro", &content), content);
    }

    #[test]
    fn unknown_kind_returns_deep_equal_copy() {
        let content = json!({"html": "<script>nope</script>"});
        assert_eq!(sanitize_widget_content("weather", &content), content);
    }

    #[test]
    fn non_object_content_is_identity() {
        for content in [json!(null), json!("<text>"), json!(3), json!(["<a>"])] {
            assert_eq!(sanitize_widget_content("todo", &content), content);
        }
    }

    #[test]
    fn malformed_nested_shapes_are_left_alone() {
        let content = json!({"tasks": [null, "not-an-object", {"text": 5}]});
        let clean = sanitize_widget_content("todo", &content);
        assert_eq!(clean, content);

        let content = json!({"columns": "oops", "searchQuery": 9});
        let clean = sanitize_widget_content("kanban", &content);
        assert_eq!(clean, content);
    }
}
