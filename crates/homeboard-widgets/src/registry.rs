//! Widget kind registry.
//!
//! The recognized widget kinds live in one static table. Each entry pairs a
//! kind's type tag with its content validator, its content sanitizer, and a
//! builder for the content a new widget of that kind starts with. Adding a
//! kind means adding a table entry; dispatch code never changes.
//!
//! Kinds without an entry are still legal widgets: they carry no content
//! rules and sanitize to an unmodified copy (the widget set is open).

use serde_json::Value;

use crate::sanitize;
use crate::schema;
use crate::validation::content;
use crate::validation::ValidationError;

/// Checks a content payload, appending violations in field order.
pub type ContentValidator = fn(&Value, &mut Vec<ValidationError>);

/// Returns an escaped copy of a content payload.
pub type ContentSanitizer = fn(&Value) -> Value;

/// Builds the content a freshly created widget of this kind starts with.
pub type ContentBuilder = fn() -> Value;

/// A registered widget kind.
pub struct WidgetKindSpec {
    /// Type tag as it appears in widget records.
    pub tag: &'static str,
    pub validate_content: ContentValidator,
    pub sanitize_content: ContentSanitizer,
    pub default_content: ContentBuilder,
}

/// Tags of all built-in widget kinds, in registration order.
pub const WIDGET_KINDS: &[&str] = &["clock", "todo", "sticky-note", "pomodoro", "kanban"];

static REGISTRY: &[WidgetKindSpec] = &[
    WidgetKindSpec {
        tag: "clock",
        validate_content: content::validate_clock,
        sanitize_content: sanitize::passthrough,
        default_content: schema::default_clock_content,
    },
    WidgetKindSpec {
        tag: "todo",
        validate_content: content::validate_todo,
        sanitize_content: sanitize::sanitize_todo,
        default_content: schema::default_todo_content,
    },
    WidgetKindSpec {
        tag: "sticky-note",
        validate_content: content::validate_sticky_note,
        sanitize_content: sanitize::sanitize_sticky_note,
        default_content: schema::default_sticky_note_content,
    },
    WidgetKindSpec {
        tag: "pomodoro",
        validate_content: content::validate_pomodoro,
        sanitize_content: sanitize::passthrough,
        default_content: schema::default_pomodoro_content,
    },
    WidgetKindSpec {
        tag: "kanban",
        validate_content: content::validate_kanban,
        sanitize_content: sanitize::sanitize_kanban,
        default_content: schema::default_kanban_content,
    },
];

/// Look up a registered kind by its type tag.
pub fn lookup(tag: &str) -> Option<&'static WidgetKindSpec> {
    REGISTRY.iter().find(|spec| spec.tag == tag)
}

/// All registered kinds, in registration order.
pub fn all() -> &'static [WidgetKindSpec] {
    REGISTRY
}
