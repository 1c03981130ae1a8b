//! Widget schema, validation, and sanitization for homeboard dashboards.
//!
//! A dashboard document is a grid layout plus a map of widgets, each with a
//! type tag and a kind-specific content payload. This crate owns the typed
//! schema for that document, the registry of built-in widget kinds, the
//! validators that check untyped records field by field, and the sanitizer
//! that escapes user text before it is rendered as markup.
//!
//! # Quick Start
//!
//! ```rust
//! use homeboard_widgets::{sanitize_widget_content, validate_widget};
//! use serde_json::json;
//!
//! let result = validate_widget(&json!({
//!     "id": "", "type": "clock", "config": {},
//!     "createdAt": 0, "updatedAt": 0,
//! }));
//! assert!(!result.is_valid);
//! assert_eq!(result.errors[0].field, "id");
//!
//! let clean = sanitize_widget_content("sticky-note", &json!({"content": "<b>hi</b>"}));
//! assert_eq!(clean["content"], "&lt;b&gt;hi&lt;&#x2F;b&gt;");
//! ```

pub mod registry;
pub mod sanitize;
pub mod schema;
pub mod validation;

// Re-export core types for convenience
pub use registry::{lookup, WidgetKindSpec, WIDGET_KINDS};
pub use sanitize::{escape_text, sanitize_widget_content};
pub use schema::{
    DashboardSettings, DashboardState, GridLayoutEntry, Theme, Widget,
};
pub use validation::{
    validate_dashboard_state, validate_grid_layout, validate_widget, validate_widget_content,
    ErrorCode, ValidationError, ValidationResult,
};
