//! Typed schema for the persisted dashboard document.
//!
//! Field names on the wire are camelCase to match the JSON documents the
//! dashboard UI reads and writes; timestamps are epoch milliseconds. All
//! aggregate structs use `serde(default)` so partial documents deserialize
//! with sensible defaults.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use homeboard_common::new_id;

use crate::registry;

// =============================================================================
// Settings
// =============================================================================

/// UI theme for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Dashboard-wide display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardSettings {
    pub theme: Theme,
    /// Number of grid columns (must be > 0).
    pub grid_cols: u32,
    /// Grid row height in pixels (must be > 0).
    pub grid_row_height: u32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            grid_cols: 12,
            grid_row_height: 50,
        }
    }
}

// =============================================================================
// Grid layout
// =============================================================================

/// One placement entry in the grid layout.
///
/// Coordinates and spans are grid units, all `>= 0`. Nothing here is tied to
/// the widget map; an entry is just a rectangle with a widget id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayoutEntry {
    /// Id of the widget this entry places.
    pub i: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(rename = "minW", skip_serializing_if = "Option::is_none")]
    pub min_w: Option<f64>,
    #[serde(rename = "minH", skip_serializing_if = "Option::is_none")]
    pub min_h: Option<f64>,
}

// =============================================================================
// Widget record
// =============================================================================

/// A dashboard tile: a type tag, a kind-specific content payload, and a
/// generic display config bag.
///
/// `content` stays an untyped `Value` because the widget set is open; the
/// per-kind typed content structs below cover the built-in kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub config: Map<String, Value>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl Widget {
    /// Create a widget of `kind` with a fresh id, that kind's default
    /// content, and matching creation/update timestamps.
    pub fn new(kind: &str) -> Self {
        let now = Utc::now();
        let content = match registry::lookup(kind) {
            Some(spec) => (spec.default_content)(),
            None => Value::Object(Map::new()),
        };
        Self {
            id: new_id(),
            kind: kind.to_string(),
            content,
            config: Map::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump `updated_at` to now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// =============================================================================
// Dashboard state
// =============================================================================

/// The whole persisted dashboard document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardState {
    pub layout: Vec<GridLayoutEntry>,
    pub widgets: BTreeMap<String, Widget>,
    pub settings: DashboardSettings,
}

// =============================================================================
// Built-in content payloads
// =============================================================================

/// Clock display format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockFormat {
    #[serde(rename = "12h")]
    #[default]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockContent {
    pub format: ClockFormat,
    pub show_date: bool,
}

impl Default for ClockContent {
    fn default() -> Self {
        Self {
            format: ClockFormat::TwelveHour,
            show_date: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoTask {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoContent {
    pub tasks: Vec<TodoTask>,
}

/// Named color preset for a sticky note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StickyNoteColor {
    pub name: String,
    pub gradient: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StickyNoteContent {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<StickyNoteColor>,
}

impl Default for StickyNoteContent {
    fn default() -> Self {
        Self {
            content: String::new(),
            color: Some(StickyNoteColor {
                name: "yellow".into(),
                gradient: "linear-gradient(135deg, #fff7b1, #ffe066)".into(),
            }),
        }
    }
}

/// Pomodoro timer settings; durations are minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PomodoroContent {
    /// Work interval in minutes (must be > 0).
    pub work_duration: f64,
    /// Break interval in minutes (must be > 0).
    pub break_duration: f64,
    pub is_running: bool,
}

impl Default for PomodoroContent {
    fn default() -> Self {
        Self {
            work_duration: 25.0,
            break_duration: 5.0,
            is_running: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KanbanAssignee {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KanbanTask {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<KanbanAssignee>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KanbanColumn {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<KanbanTask>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KanbanContent {
    pub columns: Vec<KanbanColumn>,
    pub search_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_filter: Option<String>,
}

impl Default for KanbanContent {
    fn default() -> Self {
        let column = |id: &str, title: &str| KanbanColumn {
            id: id.into(),
            title: title.into(),
            tasks: Vec::new(),
        };
        Self {
            columns: vec![
                column("todo", "To Do"),
                column("in-progress", "In Progress"),
                column("done", "Done"),
            ],
            search_query: String::new(),
            assignee_filter: None,
        }
    }
}

// =============================================================================
// Default content builders (registered per kind)
// =============================================================================

fn content_value<T: Serialize>(content: T) -> Value {
    serde_json::to_value(content).unwrap_or_else(|_| Value::Object(Map::new()))
}

pub(crate) fn default_clock_content() -> Value {
    content_value(ClockContent::default())
}

pub(crate) fn default_todo_content() -> Value {
    content_value(TodoContent::default())
}

pub(crate) fn default_sticky_note_content() -> Value {
    content_value(StickyNoteContent::default())
}

pub(crate) fn default_pomodoro_content() -> Value {
    content_value(PomodoroContent::default())
}

pub(crate) fn default_kanban_content() -> Value {
    content_value(KanbanContent::default())
}
