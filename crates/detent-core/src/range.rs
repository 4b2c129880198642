//! Validated knob bounds and step.

use crate::KnobError;

/// A validated `(min, max, step)` triple.
///
/// Construction enforces `min < max` and `step > 0`, with all three finite,
/// so everything derived from a `KnobRange` (angle mapping, angle step) is
/// defined without further checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobRange {
    min: f32,
    max: f32,
    step: f32,
}

impl KnobRange {
    /// Validate and build a range.
    ///
    /// # Errors
    ///
    /// - [`KnobError::NonFinite`] if any input is NaN or infinite, or if
    ///   `max - min` or the stop count overflows
    /// - [`KnobError::InvalidRange`] if `max < min`
    /// - [`KnobError::DegenerateRange`] if `max == min`
    /// - [`KnobError::InvalidStep`] if `step <= 0`
    pub fn new(min: f32, max: f32, step: f32) -> Result<Self, KnobError> {
        if !min.is_finite() {
            return Err(KnobError::NonFinite("min"));
        }
        if !max.is_finite() {
            return Err(KnobError::NonFinite("max"));
        }
        if !step.is_finite() {
            return Err(KnobError::NonFinite("step"));
        }
        if max < min {
            return Err(KnobError::InvalidRange { min, max });
        }
        if max == min {
            return Err(KnobError::DegenerateRange { value: min });
        }
        if step <= 0.0 {
            return Err(KnobError::InvalidStep(step));
        }
        let range = Self { min, max, step };
        if !range.span().is_finite() {
            return Err(KnobError::NonFinite("max - min"));
        }
        let stops = range.stop_count();
        if !stops.is_finite() || stops <= 0.0 {
            return Err(KnobError::NonFinite("stop count"));
        }
        Ok(range)
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Step interval between representable values.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// `max - min`, always positive.
    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Whether `value` lies in `[min, max]`.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into `[min, max]`.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Number of stops around the dial: `(max - min + 1) / step`.
    ///
    /// Counts the representable values between `min` and `max` inclusive at
    /// the given step. Not necessarily an integer.
    #[inline]
    pub fn stop_count(&self) -> f32 {
        (self.span() + 1.0) / self.step
    }
}

impl Default for KnobRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_accepts_valid() {
        let range = KnobRange::new(-10.0, 10.0, 0.5).unwrap();
        assert_eq!(range.min(), -10.0);
        assert_eq!(range.max(), 10.0);
        assert_eq!(range.step(), 0.5);
        assert_eq!(range.span(), 20.0);
    }

    #[test]
    fn test_range_rejects_inverted() {
        assert_eq!(
            KnobRange::new(10.0, 0.0, 1.0),
            Err(KnobError::InvalidRange {
                min: 10.0,
                max: 0.0
            })
        );
    }

    #[test]
    fn test_range_rejects_degenerate() {
        assert_eq!(
            KnobRange::new(50.0, 50.0, 1.0),
            Err(KnobError::DegenerateRange { value: 50.0 })
        );
    }

    #[test]
    fn test_range_rejects_non_positive_step() {
        assert_eq!(
            KnobRange::new(0.0, 100.0, 0.0),
            Err(KnobError::InvalidStep(0.0))
        );
        assert_eq!(
            KnobRange::new(0.0, 100.0, -1.0),
            Err(KnobError::InvalidStep(-1.0))
        );
    }

    #[test]
    fn test_range_rejects_nan() {
        assert_eq!(
            KnobRange::new(f32::NAN, 1.0, 1.0),
            Err(KnobError::NonFinite("min"))
        );
        assert_eq!(
            KnobRange::new(0.0, f32::INFINITY, 1.0),
            Err(KnobError::NonFinite("max"))
        );
        assert_eq!(
            KnobRange::new(0.0, 1.0, f32::NAN),
            Err(KnobError::NonFinite("step"))
        );
    }

    #[test]
    fn test_range_rejects_overflowing_span() {
        assert_eq!(
            KnobRange::new(-3.0e38, 3.0e38, 1.0),
            Err(KnobError::NonFinite("max - min"))
        );
    }

    #[test]
    fn test_range_rejects_overflowing_stop_count() {
        assert_eq!(
            KnobRange::new(0.0, 3.0e38, 1.0e-10),
            Err(KnobError::NonFinite("stop count"))
        );
    }

    #[test]
    fn test_range_contains_and_clamp() {
        let range = KnobRange::default();
        assert!(range.contains(0.0));
        assert!(range.contains(100.0));
        assert!(!range.contains(100.5));
        assert_eq!(range.clamp(-3.0), 0.0);
        assert_eq!(range.clamp(130.0), 100.0);
    }

    #[test]
    fn test_stop_count() {
        assert_eq!(KnobRange::default().stop_count(), 101.0);
        let range = KnobRange::new(0.0, 100.0, 25.0).unwrap();
        assert!((range.stop_count() - 4.04).abs() < 1e-5);
    }
}
