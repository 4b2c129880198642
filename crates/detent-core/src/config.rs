//! Knob configuration.

use crate::{DEFAULT_DRAG_JUMP_LIMIT, KnobError, KnobRange, QuantizeMode};

/// What to do with a supplied value outside `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValuePolicy {
    /// Fail with [`KnobError::OutOfRangeValue`].
    #[default]
    Reject,
    /// Clamp into range (logged at `warn` with the `tracing` feature).
    Clamp,
}

/// Construction-time configuration for a [`KnobState`](crate::KnobState).
///
/// Defaults: range `0..=100`, step `1`, initial value `min`, whole-degree
/// quantization, reject out-of-range values, 90° drag jump limit.
///
/// # Example
///
/// ```rust
/// use detent_core::{KnobConfig, QuantizeMode, ValuePolicy};
///
/// let config = KnobConfig::default()
///     .with_range(-12.0, 12.0)
///     .with_step(0.5)
///     .with_value(0.0)
///     .with_quantize(QuantizeMode::Exact)
///     .with_value_policy(ValuePolicy::Clamp);
/// assert!(config.range().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobConfig {
    /// Lower bound.
    pub min: f32,
    /// Upper bound (must exceed `min`).
    pub max: f32,
    /// Step interval between representable values (must be `> 0`).
    pub step: f32,
    /// Initial value; `None` starts at `min`.
    pub initial_value: Option<f32>,
    /// Start angle of the decorative marker sweep (rendering only).
    pub marker_start_angle: f32,
    /// Degrees added to the end of the marker sweep (rendering only).
    pub marker_ahead: f32,
    /// Snapping mode for resolved angles.
    pub quantize: QuantizeMode,
    /// Out-of-range value handling.
    pub value_policy: ValuePolicy,
    /// Maximum accepted angular jump while dragging, in degrees.
    pub drag_jump_limit: f32,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            initial_value: None,
            marker_start_angle: 0.0,
            marker_ahead: 0.0,
            quantize: QuantizeMode::default(),
            value_policy: ValuePolicy::default(),
            drag_jump_limit: DEFAULT_DRAG_JUMP_LIMIT,
        }
    }
}

impl KnobConfig {
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
        self.initial_value = Some(value);
        self
    }

    /// Set the marker sweep decoration.
    pub fn with_marker(mut self, start_angle: f32, ahead: f32) -> Self {
        self.marker_start_angle = start_angle;
        self.marker_ahead = ahead;
        self
    }

    /// Set the quantization mode.
    pub fn with_quantize(mut self, mode: QuantizeMode) -> Self {
        self.quantize = mode;
        self
    }

    /// Set the out-of-range value policy.
    pub fn with_value_policy(mut self, policy: ValuePolicy) -> Self {
        self.value_policy = policy;
        self
    }

    /// Set the drag jump limit in degrees.
    pub fn with_drag_jump_limit(mut self, degrees: f32) -> Self {
        self.drag_jump_limit = degrees;
        self
    }

    /// Validate the bounds and step.
    pub fn range(&self) -> Result<KnobRange, KnobError> {
        KnobRange::new(self.min, self.max, self.step)
    }

    /// Validate every field except the initial value.
    ///
    /// The initial value depends on [`value_policy`](Self::value_policy) and
    /// is resolved by [`KnobState::new`](crate::KnobState::new).
    pub fn validate(&self) -> Result<KnobRange, KnobError> {
        let range = self.range()?;
        if !self.marker_start_angle.is_finite() {
            return Err(KnobError::NonFinite("marker_start_angle"));
        }
        if !self.marker_ahead.is_finite() {
            return Err(KnobError::NonFinite("marker_ahead"));
        }
        if !self.drag_jump_limit.is_finite() {
            return Err(KnobError::NonFinite("drag_jump_limit"));
        }
        if self.drag_jump_limit <= 0.0 {
            return Err(KnobError::InvalidJumpLimit(self.drag_jump_limit));
        }
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_widget_defaults() {
        let config = KnobConfig::default();
        assert_eq!(config.min, 0.0);
        assert_eq!(config.max, 100.0);
        assert_eq!(config.step, 1.0);
        assert_eq!(config.initial_value, None);
        assert_eq!(config.quantize, QuantizeMode::WholeDegrees);
        assert_eq!(config.value_policy, ValuePolicy::Reject);
        assert_eq!(config.drag_jump_limit, 90.0);
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = KnobConfig::default()
            .with_range(1.0, 11.0)
            .with_step(2.0)
            .with_value(5.0)
            .with_marker(6.0, 6.0)
            .with_drag_jump_limit(45.0);
        assert_eq!((config.min, config.max, config.step), (1.0, 11.0, 2.0));
        assert_eq!(config.initial_value, Some(5.0));
        assert_eq!(config.marker_start_angle, 6.0);
        assert_eq!(config.marker_ahead, 6.0);
        assert_eq!(config.drag_jump_limit, 45.0);
    }

    #[test]
    fn test_validate_rejects_bad_jump_limit() {
        let config = KnobConfig::default().with_drag_jump_limit(0.0);
        assert_eq!(config.validate(), Err(KnobError::InvalidJumpLimit(0.0)));
    }

    #[test]
    fn test_validate_rejects_non_finite_marker() {
        let config = KnobConfig::default().with_marker(f32::NAN, 0.0);
        assert_eq!(
            config.validate(),
            Err(KnobError::NonFinite("marker_start_angle"))
        );
    }

    #[test]
    fn test_validate_propagates_range_errors() {
        let config = KnobConfig::default().with_range(50.0, 50.0);
        assert_eq!(
            config.validate(),
            Err(KnobError::DegenerateRange { value: 50.0 })
        );
    }
}
