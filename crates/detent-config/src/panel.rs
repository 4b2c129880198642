//! Panel file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use detent_core::KnobState;

use crate::error::ConfigError;
use crate::knob_spec::KnobSpec;

/// A named grid of knobs.
///
/// Panels are stored as TOML files containing layout hints and a list of
/// knob specs. They can be loaded from files, created programmatically, and
/// saved to disk.
///
/// # TOML Format
///
/// ```toml
/// name = "Mixer"
/// description = "Channel strip"
/// columns = 2
///
/// [[knobs]]
/// name = "gain"
/// min = -12.0
/// max = 12.0
/// step = 0.5
/// value = 0.0
/// quantize = "exact"
///
/// [[knobs]]
/// name = "pan"
/// min = -50.0
/// max = 50.0
/// value = 0.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Panel {
    /// Name of the panel.
    pub name: String,

    /// Optional description of the panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of grid columns (defaults to 3).
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Knobs in row-major order.
    #[serde(default)]
    pub knobs: Vec<KnobSpec>,
}

fn default_columns() -> u32 {
    3
}

impl Panel {
    /// Create a new empty panel.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            columns: default_columns(),
            knobs: Vec::new(),
        }
    }

    /// Create a panel with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the number of grid columns.
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// Add a knob to the panel.
    pub fn with_knob(mut self, knob: KnobSpec) -> Self {
        self.knobs.push(knob);
        self
    }

    /// Load a panel from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let panel: Panel = toml::from_str(&content)?;
        Ok(panel)
    }

    /// Load a panel from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the panel to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the panel to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the number of knobs in the panel.
    pub fn len(&self) -> usize {
        self.knobs.len()
    }

    /// Check if the panel is empty.
    pub fn is_empty(&self) -> bool {
        self.knobs.is_empty()
    }

    /// Iterate over knob specs.
    pub fn iter(&self) -> impl Iterator<Item = &KnobSpec> {
        self.knobs.iter()
    }

    /// Find a knob by name.
    pub fn knob(&self, name: &str) -> Option<&KnobSpec> {
        self.knobs.iter().find(|k| k.name == name)
    }

    /// Find a knob by name, or fail with [`ConfigError::KnobNotFound`].
    pub fn require_knob(&self, name: &str) -> Result<&KnobSpec, ConfigError> {
        self.knob(name).ok_or_else(|| ConfigError::KnobNotFound {
            panel: self.name.clone(),
            knob: name.to_string(),
        })
    }

    /// Find a knob by name for editing.
    pub fn knob_mut(&mut self, name: &str) -> Option<&mut KnobSpec> {
        self.knobs.iter_mut().find(|k| k.name == name)
    }

    /// Get the knob names in order.
    pub fn knob_names(&self) -> Vec<&str> {
        self.knobs.iter().map(|k| k.name.as_str()).collect()
    }

    /// Build a live knob for every spec, in order.
    ///
    /// Fails on the first spec the core rejects.
    pub fn build_states(&self) -> Result<Vec<KnobState>, ConfigError> {
        self.knobs.iter().map(KnobSpec::build_state).collect()
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
