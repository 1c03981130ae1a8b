//! State operations the dashboard UI performs.
//!
//! These keep the layout and the widget map in step: adding a widget places
//! it at the bottom of the grid, removing one drops its layout entries too.
//! Validation never assumes this pairing; documents from elsewhere may
//! violate it.

use serde_json::Value;

use homeboard_widgets::{DashboardState, GridLayoutEntry, Widget};

/// Default size of a newly placed widget, in grid units.
const DEFAULT_SPAN: f64 = 4.0;

/// Create a widget of `kind`, place it at the bottom of the grid, and
/// return its id.
pub fn add_widget(state: &mut DashboardState, kind: &str) -> String {
    let widget = Widget::new(kind);
    let id = widget.id.clone();
    let bottom = state
        .layout
        .iter()
        .map(|entry| entry.y + entry.h)
        .fold(0.0, f64::max);
    state.layout.push(GridLayoutEntry {
        i: id.clone(),
        x: 0.0,
        y: bottom,
        w: DEFAULT_SPAN,
        h: DEFAULT_SPAN,
        min_w: None,
        min_h: None,
    });
    state.widgets.insert(id.clone(), widget);
    id
}

/// Remove a widget and every layout entry that places it.
/// Returns `true` if the widget existed.
pub fn remove_widget(state: &mut DashboardState, id: &str) -> bool {
    let existed = state.widgets.remove(id).is_some();
    state.layout.retain(|entry| entry.i != id);
    existed
}

/// Replace a widget's content payload and bump its `updated_at`.
/// Returns `false` if no widget has the given id.
pub fn update_widget_content(state: &mut DashboardState, id: &str, content: Value) -> bool {
    match state.widgets.get_mut(id) {
        Some(widget) => {
            widget.content = content;
            widget.touch();
            true
        }
        None => false,
    }
}
