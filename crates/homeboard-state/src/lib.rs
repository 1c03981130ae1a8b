//! Dashboard state persistence for homeboard.
//!
//! Owns the JSON snapshot of the dashboard document: starter state on first
//! run, validate-on-load with warnings for broken widgets, atomic saves,
//! and the mutations the UI performs on a live state.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use homeboard_common::NotificationQueue;
//!
//! let mut notifications = NotificationQueue::default();
//! let state = homeboard_state::load_state(&mut notifications).expect("failed to load state");
//! println!("{} widgets", state.widgets.len());
//! ```

pub mod json_loader;
pub mod json_writer;
pub mod mutations;

// Re-export core entry points for convenience
pub use json_loader::{default_state_path, load_default, load_from_path, starter_state};
pub use json_writer::{save_state, save_state_to_path};
pub use mutations::{add_widget, remove_widget, update_widget_content};

use tracing::warn;

use homeboard_common::{Notification, NotificationQueue, StateError};
use homeboard_widgets::{validate_widget, DashboardState};

/// Load the dashboard state from the platform default path and queue a
/// persistent warning for every widget that fails validation.
///
/// Invalid widgets stay in the returned state; the warnings exist so the UI
/// can render them alongside the widget until the user dismisses them.
pub fn load_state(notifications: &mut NotificationQueue) -> Result<DashboardState, StateError> {
    let state = json_loader::load_default()?;
    let flagged = report_invalid_widgets(&state, notifications);
    if flagged > 0 {
        warn!("{flagged} widget(s) failed validation");
    }
    Ok(state)
}

/// Queue a persistent warning for each invalid widget in `state`.
/// Returns the number of widgets flagged.
pub fn report_invalid_widgets(
    state: &DashboardState,
    notifications: &mut NotificationQueue,
) -> usize {
    let mut flagged = 0;
    for (id, widget) in &state.widgets {
        let Ok(record) = serde_json::to_value(widget) else {
            continue;
        };
        let result = validate_widget(&record);
        if !result.is_valid {
            notifications.push(Notification::persistent_warning(
                format!("widget '{id}' has invalid data"),
                result.summary(),
            ));
            flagged += 1;
        }
    }
    flagged
}
