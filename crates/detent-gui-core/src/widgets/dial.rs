//! Rotary dial widget.
//!
//! Unlike a value-drag knob, the dial follows the pointer's angle around its
//! center: press anywhere inside the widget to jump there, then drag around.
//! Snapping, the jump guard and value mapping all live in [`KnobState`];
//! this widget only forwards pointer events and paints the result.
//!
//! Layers, back to front: marker-off ring, marker sweep, knob background
//! disc, knob body, pointer, value label.

use detent_core::{FULL_TURN, GestureOutcome, KnobState};
use egui::{Align2, FontId, Painter, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget, vec2};

use crate::Appearance;
use crate::render::{RenderState, polar_point, to_knob_frame};

/// Default widget edge length in points.
const DEFAULT_SIZE: f32 = 120.0;

/// Arc segments for a full turn.
const SEGMENTS_PER_TURN: f32 = 64.0;

/// Rotary dial bound to a [`KnobState`].
pub struct Dial<'a> {
    state: &'a mut KnobState,
    appearance: &'a Appearance,
    size: f32,
}

/// Response of one [`Dial`] frame.
pub struct DialResponse {
    /// The egui response; marked changed when a gesture committed.
    pub response: Response,
    /// What the knob did with this frame's pointer event, if there was one.
    pub outcome: Option<GestureOutcome>,
}

impl<'a> Dial<'a> {
    /// Create a dial for `state` painted with `appearance`.
    pub fn new(state: &'a mut KnobState, appearance: &'a Appearance) -> Self {
        Self {
            state,
            appearance,
            size: DEFAULT_SIZE,
        }
    }

    /// Set the widget edge length in points.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Run one frame and report the gesture outcome alongside the response.
    pub fn show(self, ui: &mut Ui) -> DialResponse {
        let (rect, mut response) =
            ui.allocate_exact_size(vec2(self.size, self.size), Sense::click_and_drag());

        // Follow the layout; the rect can move between frames.
        self.state.set_center(to_knob_frame(rect.center()));

        let (pressed, released, moved, pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.delta() != Vec2::ZERO,
                i.pointer.interact_pos(),
            )
        });

        let mut outcome = None;
        if let Some(pos) = pos.filter(|p| rect.contains(*p)) {
            let point = to_knob_frame(pos);
            if pressed && response.contains_pointer() {
                outcome = Some(self.state.press(point));
            } else if moved && self.state.phase().is_active() {
                outcome = Some(self.state.move_to(point));
            }
        }
        if released && self.state.phase().is_active() {
            self.state.release();
        }

        if ui.is_rect_visible(rect) {
            let render = RenderState::from_state(self.state, rect, self.appearance.knob_size());
            paint(ui.painter(), rect, &render, self.appearance);
        }

        if outcome.is_some_and(|o| o.is_committed()) {
            response.mark_changed();
        }

        DialResponse { response, outcome }
    }
}

impl Widget for Dial<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui).response
    }
}

fn paint(painter: &Painter, rect: Rect, render: &RenderState, appearance: &Appearance) {
    let center = rect.center();
    let outer = rect.width().min(rect.height()) / 2.0;
    let knob_radius = render.knob_rect.width().min(render.knob_rect.height()) / 2.0;
    let ring_width = (outer - knob_radius).max(2.0);
    let ring_radius = outer - ring_width / 2.0;

    draw_arc(
        painter,
        center,
        ring_radius,
        0.0,
        FULL_TURN,
        Stroke::new(ring_width, appearance.marker_off_color()),
    );
    if render.marker_sweep_end > render.marker_sweep_start {
        draw_arc(
            painter,
            center,
            ring_radius,
            render.marker_sweep_start,
            render.marker_sweep_end,
            Stroke::new(ring_width, appearance.marker_color()),
        );
    }

    painter.circle_filled(center, knob_radius, appearance.knob_bg_color());
    painter.circle_filled(center, knob_radius * 0.85, appearance.knob_color());

    let pointer = Stroke::new((knob_radius * 0.08).max(2.0), appearance.font_color());
    painter.line_segment(
        [
            polar_point(center, knob_radius * 0.45, render.angle),
            polar_point(center, knob_radius * 0.8, render.angle),
        ],
        pointer,
    );

    if appearance.show_label() {
        painter.text(
            center,
            Align2::CENTER_CENTER,
            &render.label,
            FontId::proportional(appearance.font_size()),
            appearance.font_color(),
        );
    }
}

/// Draw a clockwise arc from `start` to `end` degrees using line segments.
fn draw_arc(painter: &Painter, center: Pos2, radius: f32, start: f32, end: f32, stroke: Stroke) {
    let points = arc_points(center, radius, start, end);
    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], stroke);
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn arc_points(center: Pos2, radius: f32, start: f32, end: f32) -> Vec<Pos2> {
    let sweep = end - start;
    let segments = ((sweep.abs() / FULL_TURN * SEGMENTS_PER_TURN).ceil() as usize).max(1);

    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            polar_point(center, radius, start + t * sweep)
        })
        .collect()
}
