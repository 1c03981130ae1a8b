//! Widget, layout, and dashboard-state validation.
//!
//! Validators take untyped `serde_json::Value` records as they arrive from
//! UI form state or from persisted storage. They accumulate field-level
//! violations instead of failing fast, never panic, and always return a
//! [`ValidationResult`]; callers decide whether a violation is recoverable.

pub(crate) mod content;
mod helpers;
mod layout;
mod result;
mod state;
mod widget;


pub use content::validate_widget_content;
pub use layout::validate_grid_layout;
pub use result::{ErrorCode, ValidationError, ValidationResult};
pub use state::validate_dashboard_state;
pub use widget::validate_widget;
