//! Pure dial geometry.
//!
//! Nothing here touches egui's painter, so it can be tested without a frame.
//! Dial angles are degrees clockwise from "up"; screen positions use egui's
//! downward Y axis.

use detent_core::{KnobState, Point};
use egui::{Pos2, Rect, pos2};

/// Everything the painter needs for one frame of a dial.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Pointer angle of the knob body.
    pub angle: f32,
    /// Where the marker sweep starts.
    pub marker_sweep_start: f32,
    /// Where the marker sweep ends; see [`marker_sweep_end`].
    pub marker_sweep_end: f32,
    /// Knob body rect, the widget rect scaled about its center.
    pub knob_rect: Rect,
    /// Centered value label.
    pub label: String,
}

impl RenderState {
    /// Snapshot `state` for painting into `rect`.
    pub fn from_state(state: &KnobState, rect: Rect, knob_size: f32) -> Self {
        let angle = state.angle();
        let start = state.marker_start_angle();
        Self {
            angle,
            marker_sweep_start: start,
            marker_sweep_end: marker_sweep_end(angle, start, state.marker_ahead()),
            knob_rect: Rect::from_center_size(rect.center(), rect.size() * knob_size),
            label: format_label(state.value()),
        }
    }
}

/// End of the marker sweep.
///
/// Past the start angle the sweep runs `ahead` degrees beyond the knob, but
/// never ends before it starts. At or before the start angle it is empty.
pub fn marker_sweep_end(angle: f32, start: f32, ahead: f32) -> f32 {
    if angle > start {
        (angle + ahead).max(start)
    } else {
        start
    }
}

/// Value label with no decimals.
pub fn format_label(value: f32) -> String {
    format!("{value:.0}")
}

/// Screen position `radius` away from `center` at dial `angle`.
pub fn polar_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    let (sin, cos) = angle.to_radians().sin_cos();
    pos2(center.x + radius * sin, center.y - radius * cos)
}

/// Screen position in the resolver's Y-up frame.
pub fn to_knob_frame(pos: Pos2) -> Point {
    Point::new(pos.x, pos.y).flip_y()
}
