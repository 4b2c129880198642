//! Snapping raw angles to the dial's discrete stops.
//!
//! The angular step is `360 / ((max - min + 1) / step)`: one stop per
//! representable value between `min` and `max` inclusive. A raw angle is
//! snapped to the nearest integer multiple of that step and wrapped into
//! `[0, 360)`.

use crate::{FULL_TURN, KnobRange, wrap_degrees};

/// How a snapped angle is finally represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantizeMode {
    /// Truncate the snapped angle toward zero to a whole degree.
    #[default]
    WholeDegrees,
    /// Keep the snapped angle as an exact multiple of the angle step.
    Exact,
}

/// Derived angle step plus the snapping rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantizer {
    angle_step: f32,
    mode: QuantizeMode,
}

impl Quantizer {
    /// Derive the angle step from `range`.
    pub fn new(range: &KnobRange, mode: QuantizeMode) -> Self {
        Self {
            angle_step: FULL_TURN / range.stop_count(),
            mode,
        }
    }

    /// Degrees between two consecutive stops.
    #[inline]
    pub fn angle_step(&self) -> f32 {
        self.angle_step
    }

    /// Snapping mode.
    #[inline]
    pub fn mode(&self) -> QuantizeMode {
        self.mode
    }

    /// Snap `raw` (degrees) to the nearest stop.
    ///
    /// A stop that lands on a full turn wraps to `0.0`.
    pub fn quantize(&self, raw: f32) -> f32 {
        self.finish(self.angle_step * libm::roundf(raw / self.angle_step))
    }

    /// Angle of the `index`-th stop, as [`quantize`](Self::quantize) would report it.
    pub fn stop_angle(&self, index: u64) -> f32 {
        self.finish(self.angle_step * index as f32)
    }

    fn finish(&self, stepped: f32) -> f32 {
        let stepped = match self.mode {
            QuantizeMode::WholeDegrees => libm::truncf(stepped),
            QuantizeMode::Exact => stepped,
        };
        wrap_degrees(stepped)
    }
}
