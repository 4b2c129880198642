//! Degree helpers shared by the mapper, quantizer and resolver.

/// Degrees in one full turn of the dial.
pub const FULL_TURN: f32 = 360.0;

/// Wrap an angle in degrees into `[0, 360)`.
///
/// Negative inputs wrap from the top (`-90.0` → `270.0`). A result that
/// rounds up to exactly `360.0` in `f32` collapses to `0.0`, so the upper
/// bound is always exclusive.
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let mut wrapped = libm::fmodf(angle, FULL_TURN);
    if wrapped < 0.0 {
        wrapped += FULL_TURN;
    }
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}
