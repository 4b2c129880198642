//! Configuration errors for knob construction and reconfiguration.
//!
//! Every variant is reported synchronously by the call that received the bad
//! input. Gesture handling never produces an error: numeric edge cases such as
//! a pointer level with the center are handled by explicit branching.

/// Errors that can occur when configuring a knob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KnobError {
    /// `max < min`. The bounds are never swapped silently.
    InvalidRange {
        /// Requested minimum.
        min: f32,
        /// Requested maximum.
        max: f32,
    },
    /// `max == min`; the value/angle mapping would divide by zero.
    DegenerateRange {
        /// The shared bound.
        value: f32,
    },
    /// `step <= 0`.
    InvalidStep(f32),
    /// A supplied value lies outside `[min, max]` under [`ValuePolicy::Reject`](crate::ValuePolicy::Reject).
    OutOfRangeValue {
        /// The rejected value.
        value: f32,
        /// Current minimum.
        min: f32,
        /// Current maximum.
        max: f32,
    },
    /// A configuration field or supplied value is NaN or infinite.
    NonFinite(&'static str),
    /// The drag jump limit must be a positive number of degrees.
    InvalidJumpLimit(f32),
}

impl core::fmt::Display for KnobError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "invalid range: max ({max}) is less than min ({min})")
            }
            Self::DegenerateRange { value } => {
                write!(f, "degenerate range: min and max are both {value}")
            }
            Self::InvalidStep(step) => write!(f, "invalid step {step}: must be greater than 0"),
            Self::OutOfRangeValue { value, min, max } => {
                write!(f, "value {value} out of range [{min}, {max}]")
            }
            Self::NonFinite(field) => write!(f, "{field} must be a finite number"),
            Self::InvalidJumpLimit(limit) => {
                write!(f, "invalid drag jump limit {limit}: must be greater than 0")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KnobError {}
