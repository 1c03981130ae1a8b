use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("state file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("state parse error: {0}")]
    ParseError(String),

    #[error("state validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HomeboardError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_error_display() {
        let err = StateError::FileNotFound(PathBuf::from("/tmp/missing.json"));
        assert_eq!(err.to_string(), "state file not found: /tmp/missing.json");

        let err = StateError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "state parse error: unexpected token");

        let err = StateError::ValidationError("id: must be a non-empty string".into());
        assert_eq!(
            err.to_string(),
            "state validation error: id: must be a non-empty string"
        );
    }

    #[test]
    fn homeboard_error_from_state() {
        let state_err = StateError::ParseError("bad json".into());
        let err: HomeboardError = state_err.into();
        assert!(matches!(err, HomeboardError::State(_)));
        assert!(err.to_string().contains("bad json"));
    }

    #[test]
    fn homeboard_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HomeboardError = io_err.into();
        assert!(matches!(err, HomeboardError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn homeboard_error_other() {
        let err = HomeboardError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
