//! Dashboard state document loading and creation.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use homeboard_common::StateError;
use homeboard_widgets::{validate_dashboard_state, DashboardState};

/// Load a dashboard state document from a specific JSON file path.
///
/// The raw document is validated field by field before deserialization.
/// Violations are logged but do not reject the document: invalid widgets
/// are still loaded so the UI can render them next to a warning. A document
/// that does not fit the schema at all falls back to the starter state.
pub fn load_from_path(path: &Path) -> Result<DashboardState, StateError> {
    if !path.exists() {
        return Err(StateError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| StateError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let document: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| StateError::ParseError(format!("failed to parse JSON: {e}")))?;

    let result = validate_dashboard_state(&document);
    if !result.is_valid {
        warn!("state validation warning: {}", result.summary());
    }

    match serde_json::from_value::<DashboardState>(document) {
        Ok(state) => {
            info!("loaded dashboard state from {}", path.display());
            Ok(state)
        }
        Err(e) => {
            warn!("state document does not fit the schema: {e}");
            warn!("falling back to starter state");
            Ok(starter_state())
        }
    }
}

/// Load state from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/homeboard/state.json`
/// On Linux: `~/.config/homeboard/state.json`
///
/// If the file does not exist, creates a starter document and returns it.
pub fn load_default() -> Result<DashboardState, StateError> {
    let path = default_state_path()?;

    if !path.exists() {
        info!("no state found at {}, creating starter state", path.display());
        return create_default_state(&path);
    }

    load_from_path(&path)
}

/// Get the platform-specific default state file path.
pub fn default_state_path() -> Result<PathBuf, StateError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| StateError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("homeboard").join("state.json"))
}

/// Write a starter state document to `path` and return it.
pub fn create_default_state(path: &Path) -> Result<DashboardState, StateError> {
    let state = starter_state();
    crate::json_writer::save_state_to_path(&state, path)?;
    info!("created starter state at {}", path.display());
    Ok(state)
}

/// The first-run dashboard: a single clock widget on a light 12-column grid.
pub fn starter_state() -> DashboardState {
    let mut state = DashboardState::default();
    crate::mutations::add_widget(&mut state, "clock");
    state
}
