//! Resolved visual options for one dial.

use detent_config::{AppearanceSpec, ColorSpec};
use egui::Color32;

/// Colors and sizes the [`Dial`](crate::Dial) paints with.
///
/// A plain value: the toggles return a new `Appearance` and never touch a
/// shared default. Colors are kept unmultiplied so hiding and re-showing the
/// marker restores the original tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    show_label: bool,
    show_marker: bool,
    knob_size: f32,
    font_size: f32,
    font_color: ColorSpec,
    knob_color: ColorSpec,
    knob_bg_color: ColorSpec,
    marker_color: ColorSpec,
    marker_off_color: ColorSpec,
}

impl Default for Appearance {
    fn default() -> Self {
        Self::from(&AppearanceSpec::default())
    }
}

impl Appearance {
    /// Show or hide the marker ring.
    ///
    /// Forces the alpha of the knob background, marker and marker-off colors
    /// to fully opaque (`true`) or fully transparent (`false`).
    #[must_use]
    pub fn with_show_marker(self, show: bool) -> Self {
        let alpha = if show { 1.0 } else { 0.0 };
        Self {
            show_marker: show,
            knob_bg_color: with_alpha(self.knob_bg_color, alpha),
            marker_color: with_alpha(self.marker_color, alpha),
            marker_off_color: with_alpha(self.marker_off_color, alpha),
            ..self
        }
    }

    /// Show or hide the value label.
    #[must_use]
    pub fn with_show_label(self, show: bool) -> Self {
        Self {
            show_label: show,
            ..self
        }
    }

    /// Whether the centered value label is drawn.
    pub fn show_label(&self) -> bool {
        self.show_label
    }

    /// Marker visibility as last set.
    pub fn show_marker(&self) -> bool {
        self.show_marker
    }

    /// Knob diameter relative to the widget.
    pub fn knob_size(&self) -> f32 {
        self.knob_size
    }

    /// Label font size in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Label and pointer color.
    pub fn font_color(&self) -> Color32 {
        color32(self.font_color)
    }

    /// Knob body tint.
    pub fn knob_color(&self) -> Color32 {
        color32(self.knob_color)
    }

    /// Disc behind the knob body.
    pub fn knob_bg_color(&self) -> Color32 {
        color32(self.knob_bg_color)
    }

    /// Reached portion of the marker ring.
    pub fn marker_color(&self) -> Color32 {
        color32(self.marker_color)
    }

    /// Full marker ring underneath the sweep.
    pub fn marker_off_color(&self) -> Color32 {
        color32(self.marker_off_color)
    }
}

impl From<&AppearanceSpec> for Appearance {
    /// Colors are taken as written. A hidden marker is applied on top, so a
    /// spec with `show_marker = false` paints no ring or background disc.
    fn from(spec: &AppearanceSpec) -> Self {
        let appearance = Self {
            show_label: spec.show_label,
            show_marker: spec.show_marker,
            knob_size: spec.knob_size,
            font_size: spec.font_size,
            font_color: spec.font_color,
            knob_color: spec.knob_color,
            knob_bg_color: spec.knob_bg_color,
            marker_color: spec.marker_color,
            marker_off_color: spec.marker_off_color,
        };
        if spec.show_marker {
            appearance
        } else {
            appearance.with_show_marker(false)
        }
    }
}

fn with_alpha([r, g, b, _]: ColorSpec, alpha: f32) -> ColorSpec {
    [r, g, b, alpha]
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn color32([r, g, b, a]: ColorSpec) -> Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(channel(r), channel(g), channel(b), channel(a))
}
