//! Knob and panel validation.
//!
//! Checks everything a panel file can get wrong before any knob is built:
//! core range/step/value errors (reported per knob), appearance bounds, and
//! duplicate knob names. All problems are collected, not just the first.
//!
//! # Example
//!
//! ```rust
//! use detent_config::{KnobSpec, Panel, validate_panel};
//!
//! let panel = Panel::new("Mixer")
//!     .with_knob(KnobSpec::new("gain").with_range(-12.0, 12.0))
//!     .with_knob(KnobSpec::new("pan").with_range(-50.0, 50.0));
//! validate_panel(&panel).expect("panel should be valid");
//! ```

use std::collections::HashSet;

use detent_core::{KnobError, KnobState};
use thiserror::Error;

use crate::{ColorSpec, KnobSpec, Panel};

/// Smallest allowed relative knob size.
pub const MIN_KNOB_SIZE: f32 = 0.1;

/// Largest allowed relative knob size.
pub const MAX_KNOB_SIZE: f32 = 1.0;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Range, step, jump limit or initial value rejected by the core.
    #[error("knob '{knob}': {source}")]
    InvalidKnob {
        /// Name of the knob.
        knob: String,
        /// Core error.
        #[source]
        source: KnobError,
    },

    /// Knob size outside `[0.1, 1.0]`.
    #[error("knob '{knob}': knob_size {value} out of range [0.1, 1.0]")]
    KnobSizeOutOfRange {
        /// Name of the knob.
        knob: String,
        /// The offending size.
        value: f32,
    },

    /// A color component outside `[0, 1]`.
    #[error("knob '{knob}': {field} component {value} out of range [0, 1]")]
    ColorOutOfRange {
        /// Name of the knob.
        knob: String,
        /// Appearance field holding the color.
        field: &'static str,
        /// The offending component.
        value: f32,
    },

    /// Font size not a positive number.
    #[error("knob '{knob}': font_size {value} must be positive")]
    InvalidFontSize {
        /// Name of the knob.
        knob: String,
        /// The offending size.
        value: f32,
    },

    /// Two knobs share a name.
    #[error("duplicate knob name '{0}'")]
    DuplicateKnob(String),

    /// A panel needs at least one column.
    #[error("panel columns must be at least 1")]
    InvalidColumns,

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate one knob spec.
pub fn validate_knob(spec: &KnobSpec) -> ValidationResult<()> {
    let mut errors = Vec::new();
    collect_knob_errors(spec, &mut errors);
    collapse(errors)
}

/// Validate a whole panel: every knob, unique names, column count.
pub fn validate_panel(panel: &Panel) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if panel.columns == 0 {
        errors.push(ValidationError::InvalidColumns);
    }

    let mut seen = HashSet::new();
    for spec in &panel.knobs {
        if !seen.insert(spec.name.as_str()) {
            errors.push(ValidationError::DuplicateKnob(spec.name.clone()));
        }
        collect_knob_errors(spec, &mut errors);
    }

    collapse(errors)
}

fn collect_knob_errors(spec: &KnobSpec, errors: &mut Vec<ValidationError>) {
    // Building a throwaway state runs the exact checks a live knob would.
    if let Err(source) = KnobState::new(spec.to_knob_config()) {
        errors.push(ValidationError::InvalidKnob {
            knob: spec.name.clone(),
            source,
        });
    }

    let appearance = &spec.appearance;
    if !(MIN_KNOB_SIZE..=MAX_KNOB_SIZE).contains(&appearance.knob_size) {
        errors.push(ValidationError::KnobSizeOutOfRange {
            knob: spec.name.clone(),
            value: appearance.knob_size,
        });
    }
    if !(appearance.font_size.is_finite() && appearance.font_size > 0.0) {
        errors.push(ValidationError::InvalidFontSize {
            knob: spec.name.clone(),
            value: appearance.font_size,
        });
    }

    let colors: [(&'static str, ColorSpec); 5] = [
        ("font_color", appearance.font_color),
        ("knob_color", appearance.knob_color),
        ("knob_bg_color", appearance.knob_bg_color),
        ("marker_color", appearance.marker_color),
        ("marker_off_color", appearance.marker_off_color),
    ];
    for (field, color) in colors {
        if let Some(&value) = color.iter().find(|c| !(0.0..=1.0).contains(*c)) {
            errors.push(ValidationError::ColorOutOfRange {
                knob: spec.name.clone(),
                field,
                value,
            });
        }
    }
}

fn collapse(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
