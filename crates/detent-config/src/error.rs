//! Panel loading and saving errors.

use detent_core::KnobError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between a panel file and live knobs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Panel file unreadable
    #[error("cannot read panel file '{path}': {source}")]
    ReadFile {
        /// File that was opened.
        path: PathBuf,
        /// I/O cause.
        #[source]
        source: std::io::Error,
    },

    /// Panel file unwritable
    #[error("cannot write panel file '{path}': {source}")]
    WriteFile {
        /// File that was written.
        path: PathBuf,
        /// I/O cause.
        #[source]
        source: std::io::Error,
    },

    /// Panel directory could not be created
    #[error("cannot create panel directory '{path}': {source}")]
    CreateDir {
        /// Directory that was created.
        path: PathBuf,
        /// I/O cause.
        #[source]
        source: std::io::Error,
    },

    /// Not a panel document
    #[error("malformed panel TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Panel could not be encoded
    #[error("cannot encode panel as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Panel not found by name or path
    #[error("panel not found: {0}")]
    PanelNotFound(String),

    /// Knob not found in a panel
    #[error("knob '{knob}' not found in panel '{panel}'")]
    KnobNotFound {
        /// Name of the panel that was searched.
        panel: String,
        /// Name of the missing knob.
        knob: String,
    },

    /// A knob spec could not be turned into a working knob
    #[error("invalid knob '{knob}': {source}")]
    InvalidKnob {
        /// Name of the offending knob.
        knob: String,
        /// Range, step or value error from the core.
        #[source]
        source: KnobError,
    },

    /// Validation errors
    #[error("validation failed: {0}")]
    Validation(#[from] crate::validation::ValidationError),
}

impl ConfigError {
    /// Wrap a read failure on `path`.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Wrap a write failure on `path`.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Wrap a directory creation failure on `path`.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid knob error.
    pub fn invalid_knob(knob: impl Into<String>, source: KnobError) -> Self {
        ConfigError::InvalidKnob {
            knob: knob.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn denied() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn read_file_names_path_and_cause() {
        let err = ConfigError::read_file("/a/panel.toml", denied());
        assert_eq!(
            err.to_string(),
            "cannot read panel file '/a/panel.toml': denied"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn create_dir_keeps_path() {
        let err = ConfigError::create_dir("/home/x/.config/detent/panels", denied());
        let ConfigError::CreateDir { path, .. } = err else {
            panic!("expected CreateDir");
        };
        assert!(path.ends_with("detent/panels"));
    }

    #[test]
    fn knob_not_found_display() {
        let err = ConfigError::KnobNotFound {
            panel: "Demo".to_string(),
            knob: "volume".to_string(),
        };
        assert_eq!(err.to_string(), "knob 'volume' not found in panel 'Demo'");
        assert!(err.source().is_none());
    }

    #[test]
    fn invalid_knob_exposes_core_error() {
        let err = ConfigError::invalid_knob("gain", KnobError::InvalidStep(0.0));
        assert_eq!(
            err.to_string(),
            "invalid knob 'gain': invalid step 0: must be greater than 0"
        );
        let source = err.source().expect("InvalidKnob must expose its source");
        assert_eq!(source.to_string(), "invalid step 0: must be greater than 0");
    }

    #[test]
    fn panel_not_found_display() {
        let err = ConfigError::PanelNotFound("nope".to_string());
        assert_eq!(err.to_string(), "panel not found: nope");
    }
}
