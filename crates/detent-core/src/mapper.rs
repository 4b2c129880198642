//! Linear mapping between knob values and dial angles.
//!
//! `angle = (value - min) * 360 / (max - min)`, wrapped into `[0, 360)`, and
//! the inverse `value = angle * (max - min) / 360 + min`. Because the angle
//! wraps, `max` lands on the same angle as `min` (0°).

use crate::{FULL_TURN, KnobRange, wrap_degrees};

/// Pure value ⇄ angle conversion for one [`KnobRange`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAngleMapper {
    min: f32,
    span: f32,
}

impl ValueAngleMapper {
    /// Build a mapper. The range guarantees a non-zero span.
    pub fn new(range: &KnobRange) -> Self {
        Self {
            min: range.min(),
            span: range.span(),
        }
    }

    /// Angle in `[0, 360)` for `value`.
    #[inline]
    pub fn value_to_angle(&self, value: f32) -> f32 {
        wrap_degrees((value - self.min) / self.span * FULL_TURN)
    }

    /// Value for `angle` (degrees). No clamping is applied.
    #[inline]
    pub fn angle_to_value(&self, angle: f32) -> f32 {
        angle / FULL_TURN * self.span + self.min
    }
}
