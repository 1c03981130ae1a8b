//! Write the dashboard state document to disk.
//!
//! Supports atomic writes (write to `.tmp`, then rename) to prevent
//! corruption if the process crashes mid-write.

use std::path::Path;

use homeboard_common::StateError;
use homeboard_widgets::DashboardState;

use crate::json_loader::default_state_path;

/// Write state to the platform default path.
pub fn save_state(state: &DashboardState) -> Result<(), StateError> {
    let path = default_state_path()?;
    save_state_to_path(state, &path)
}

/// Write state to a specific path.
///
/// Creates parent directories if they don't exist. Uses atomic write
/// (write to `.tmp` file, then rename) to prevent partial writes.
pub fn save_state_to_path(state: &DashboardState, path: &Path) -> Result<(), StateError> {
    let json = serde_json::to_string_pretty(state)
        .map_err(|e| StateError::ParseError(format!("failed to serialize state to JSON: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            StateError::ParseError(format!(
                "failed to create state directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, &json).map_err(|e| {
        StateError::ParseError(format!("failed to write state to {}: {e}", tmp_path.display()))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename failed — try direct write as fallback (Windows compat)
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, &json).map_err(|e2| {
            StateError::ParseError(format!("failed to write state to {}: {e2}", path.display()))
        })?;
    }

    tracing::debug!(path = %path.display(), "state saved to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_loader::load_from_path;
    use crate::mutations::add_widget;
    use homeboard_widgets::DashboardState;
    use tempfile::TempDir;

    #[test]
    fn save_writes_valid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        save_state_to_path(&DashboardState::default(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed["settings"]["theme"], "light");
        assert_eq!(parsed["settings"]["gridCols"], 12);
    }

    #[test]
    fn save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let mut state = DashboardState::default();
        let todo = add_widget(&mut state, "todo");
        add_widget(&mut state, "pomodoro");
        save_state_to_path(&state, &path).unwrap();

        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.layout, state.layout);
        assert_eq!(loaded.settings, state.settings);
        assert_eq!(loaded.widgets.len(), 2);
        assert_eq!(loaded.widgets[&todo].kind, "todo");
        assert_eq!(loaded.widgets[&todo].content, state.widgets[&todo].content);
        // Timestamps round-trip at millisecond precision
        assert_eq!(
            loaded.widgets[&todo].created_at.timestamp_millis(),
            state.widgets[&todo].created_at.timestamp_millis()
        );
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("state.json");

        save_state_to_path(&DashboardState::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_cleans_up_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        save_state_to_path(&DashboardState::default(), &path).unwrap();

        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists(), "tmp file should be cleaned up after rename");
    }
}
