//! Knob description as stored in panel files.

use detent_core::{DEFAULT_DRAG_JUMP_LIMIT, KnobConfig, KnobState, QuantizeMode, ValuePolicy};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// RGBA color with components in `[0, 1]`.
pub type ColorSpec = [f32; 4];

/// Snapping mode as written in TOML (`"whole-degrees"` or `"exact"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuantizeSetting {
    /// Truncate snapped angles to whole degrees.
    #[default]
    WholeDegrees,
    /// Keep exact multiples of the angle step.
    Exact,
}

impl From<QuantizeSetting> for QuantizeMode {
    fn from(setting: QuantizeSetting) -> Self {
        match setting {
            QuantizeSetting::WholeDegrees => QuantizeMode::WholeDegrees,
            QuantizeSetting::Exact => QuantizeMode::Exact,
        }
    }
}

impl From<QuantizeMode> for QuantizeSetting {
    fn from(mode: QuantizeMode) -> Self {
        match mode {
            QuantizeMode::WholeDegrees => QuantizeSetting::WholeDegrees,
            QuantizeMode::Exact => QuantizeSetting::Exact,
        }
    }
}

/// Out-of-range value handling as written in TOML (`"reject"` or `"clamp"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuePolicySetting {
    /// Fail on out-of-range values.
    #[default]
    Reject,
    /// Clamp out-of-range values.
    Clamp,
}

impl From<ValuePolicySetting> for ValuePolicy {
    fn from(setting: ValuePolicySetting) -> Self {
        match setting {
            ValuePolicySetting::Reject => ValuePolicy::Reject,
            ValuePolicySetting::Clamp => ValuePolicy::Clamp,
        }
    }
}

impl From<ValuePolicy> for ValuePolicySetting {
    fn from(policy: ValuePolicy) -> Self {
        match policy {
            ValuePolicy::Reject => ValuePolicySetting::Reject,
            ValuePolicy::Clamp => ValuePolicySetting::Clamp,
        }
    }
}

/// Visual options consumed by the rendering side.
///
/// Missing fields take the widget defaults: label and marker shown,
/// knob drawn at 90% of the widget size, white knob, marker and label,
/// black knob background, transparent marker-off ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSpec {
    /// Show the centered value label.
    pub show_label: bool,
    /// Show the marker ring around the knob.
    pub show_marker: bool,
    /// Knob diameter relative to the widget, `0.1 ..= 1.0`.
    pub knob_size: f32,
    /// Label font size in points.
    pub font_size: f32,
    /// Label color.
    pub font_color: ColorSpec,
    /// Knob body tint.
    pub knob_color: ColorSpec,
    /// Disc drawn behind the knob body.
    pub knob_bg_color: ColorSpec,
    /// Marker sweep color (reached portion).
    pub marker_color: ColorSpec,
    /// Marker ring color (portion not reached yet).
    pub marker_off_color: ColorSpec,
}

impl Default for AppearanceSpec {
    fn default() -> Self {
        Self {
            show_label: true,
            show_marker: true,
            knob_size: 0.9,
            font_size: 10.0,
            font_color: [1.0, 1.0, 1.0, 1.0],
            knob_color: [1.0, 1.0, 1.0, 1.0],
            knob_bg_color: [0.0, 0.0, 0.0, 1.0],
            marker_color: [1.0, 1.0, 1.0, 1.0],
            marker_off_color: [0.0, 0.0, 0.0, 0.0],
        }
    }
}

/// One knob in a panel file.
///
/// # TOML Format
///
/// ```toml
/// [[knobs]]
/// name = "volume"
/// min = 0.0
/// max = 100.0
/// step = 1.0
/// value = 0.0
/// quantize = "whole-degrees"
/// value_policy = "reject"
///
/// [knobs.appearance]
/// knob_size = 0.8
/// marker_off_color = [0.3, 0.3, 0.3, 1.0]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnobSpec {
    /// Unique name within the panel.
    pub name: String,

    /// Lower bound (defaults to 0).
    #[serde(default = "default_min")]
    pub min: f32,

    /// Upper bound (defaults to 100).
    #[serde(default = "default_max")]
    pub max: f32,

    /// Step interval (defaults to 1).
    #[serde(default = "default_step")]
    pub step: f32,

    /// Initial value; `min` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,

    /// Marker sweep start angle in degrees.
    #[serde(default)]
    pub marker_start_angle: f32,

    /// Degrees added to the marker sweep end.
    #[serde(default)]
    pub marker_ahead: f32,

    /// Snapping mode.
    #[serde(default)]
    pub quantize: QuantizeSetting,

    /// Out-of-range value handling.
    #[serde(default)]
    pub value_policy: ValuePolicySetting,

    /// Maximum accepted jump while dragging, in degrees.
    #[serde(default = "default_drag_jump_limit")]
    pub drag_jump_limit: f32,

    /// Visual options.
    #[serde(default)]
    pub appearance: AppearanceSpec,
}

fn default_min() -> f32 {
    0.0
}

fn default_max() -> f32 {
    100.0
}

fn default_step() -> f32 {
    1.0
}

fn default_drag_jump_limit() -> f32 {
    DEFAULT_DRAG_JUMP_LIMIT
}

impl KnobSpec {
    /// Create a knob spec with default range, step and appearance.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_config(name, &KnobConfig::default())
    }

    /// Describe an existing core configuration.
    pub fn from_config(name: impl Into<String>, config: &KnobConfig) -> Self {
        Self {
            name: name.into(),
            min: config.min,
            max: config.max,
            step: config.step,
            value: config.initial_value,
            marker_start_angle: config.marker_start_angle,
            marker_ahead: config.marker_ahead,
            quantize: config.quantize.into(),
            value_policy: config.value_policy.into(),
            drag_jump_limit: config.drag_jump_limit,
            appearance: AppearanceSpec::default(),
        }
    }

    /// Set the bounds.
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the step interval.
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the marker sweep decoration.
    pub fn with_marker(mut self, start_angle: f32, ahead: f32) -> Self {
        self.marker_start_angle = start_angle;
        self.marker_ahead = ahead;
        self
    }

    /// Set the appearance.
    pub fn with_appearance(mut self, appearance: AppearanceSpec) -> Self {
        self.appearance = appearance;
        self
    }

    /// Core configuration described by this spec (not yet validated).
    pub fn to_knob_config(&self) -> KnobConfig {
        KnobConfig {
            min: self.min,
            max: self.max,
            step: self.step,
            initial_value: self.value,
            marker_start_angle: self.marker_start_angle,
            marker_ahead: self.marker_ahead,
            quantize: self.quantize.into(),
            value_policy: self.value_policy.into(),
            drag_jump_limit: self.drag_jump_limit,
        }
    }

    /// Build a live knob.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidKnob`] wrapping the core error.
    pub fn build_state(&self) -> Result<KnobState, ConfigError> {
        KnobState::new(self.to_knob_config())
            .map_err(|source| ConfigError::invalid_knob(&self.name, source))
    }
}
