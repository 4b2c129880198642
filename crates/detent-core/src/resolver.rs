//! Pointer position → dial angle.
//!
//! Angles are measured clockwise from the zero reference, which points along
//! the positive Y axis ("up"). Callers whose Y axis grows downward (most
//! screen frameworks) must flip Y before resolving; see [`Point::flip_y`].
//!
//! # Quadrants
//!
//! Quadrants are numbered clockwise starting at the zero reference:
//!
//! ```text
//!            0°
//!      IV    │    I
//!   270° ────┼──── 90°
//!     III    │   II
//!           180°
//! ```
//!
//! The arctangent of `rx / ry` is only defined for `ry != 0`; the level case
//! is branched explicitly to 90° or 270°.

use core::f32::consts::PI;

use crate::{FULL_TURN, wrap_degrees};

/// A 2-D position in the resolver's frame (Y toward the zero reference).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate, increasing toward the zero reference.
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Mirror across the X axis, converting between Y-down and Y-up frames.
    pub const fn flip_y(self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
        }
    }

    /// Offset of `self` from `origin`.
    pub fn relative_to(self, origin: Point) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

/// Clockwise quadrant around the dial center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// `[0°, 90°]`: right of the zero reference, above center.
    First,
    /// `(90°, 180°)`: right, below center.
    Second,
    /// `[180°, 270°)`: left (or on the axis), below center.
    Third,
    /// `[270°, 360°)`: left, above (or level with) center.
    Fourth,
}

impl Quadrant {
    /// Clockwise quadrant number, 1 through 4.
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
        }
    }
}

/// Classify an offset `(rx, ry)` from the center.
///
/// Points on the vertical axis above center (and the center itself) belong to
/// the first quadrant; points on it below center belong to the third.
pub fn quadrant(rx: f32, ry: f32) -> Quadrant {
    if ry >= 0.0 {
        if rx >= 0.0 {
            Quadrant::First
        } else {
            Quadrant::Fourth
        }
    } else if rx > 0.0 {
        Quadrant::Second
    } else {
        Quadrant::Third
    }
}

/// Raw angle in `[0, 360)` of `pointer` around `center`, clockwise from "up".
pub fn resolve_angle(pointer: Point, center: Point) -> f32 {
    let offset = pointer.relative_to(center);
    let (rx, ry) = (offset.x, offset.y);
    let quadrant = quadrant(rx, ry);

    if ry == 0.0 {
        return match quadrant {
            Quadrant::First | Quadrant::Second => 90.0,
            Quadrant::Third | Quadrant::Fourth => 270.0,
        };
    }

    let angle = libm::atanf(rx / ry) * 180.0 / PI;
    let angle = match quadrant {
        Quadrant::First => angle,
        Quadrant::Second | Quadrant::Third => angle + 180.0,
        Quadrant::Fourth => angle + FULL_TURN,
    };
    wrap_degrees(angle)
}
