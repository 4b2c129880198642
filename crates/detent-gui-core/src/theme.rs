//! Window chrome colors.
//!
//! Dial colors come from each knob's [`Appearance`](crate::Appearance); the
//! theme only paints what sits around the dials.

use egui::{Color32, CornerRadius, Margin, Stroke, Visuals};

/// Rounding shared by every widget state.
const ROUNDING: CornerRadius = CornerRadius::same(6);

/// Palette for the panel window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Deepest fill: text edits, scroll gutters.
    pub background: Color32,
    /// Side and top panels.
    pub panel_bg: Color32,
    /// Card behind each dial. Grey, so dark and light knob tints both read.
    pub dial_cell: Color32,
    /// Heading and hover outline.
    pub accent: Color32,
    /// Body text.
    pub text_primary: Color32,
    /// Counters and hints.
    pub text_secondary: Color32,
    /// Activity line for a committed change.
    pub log_commit: Color32,
    /// Activity line for a rejected jump or a load error.
    pub log_reject: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_gray(18),
            panel_bg: Color32::from_gray(32),
            dial_cell: Color32::from_gray(118),
            accent: Color32::from_rgb(254, 148, 0),
            text_primary: Color32::from_gray(228),
            text_secondary: Color32::from_gray(150),
            log_commit: Color32::from_rgb(110, 200, 120),
            log_reject: Color32::from_rgb(230, 110, 90),
        }
    }
}

impl Theme {
    /// Install the palette on `ctx`.
    pub fn apply(&self, ctx: &egui::Context) {
        let visuals = self.visuals();
        ctx.style_mut(|style| {
            style.visuals = visuals;
            style.spacing.item_spacing = egui::vec2(10.0, 6.0);
            style.spacing.window_margin = Margin::same(10);
        });
    }

    /// Dark visuals recolored with this palette.
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.panel_bg;
        visuals.window_fill = self.panel_bg;
        visuals.extreme_bg_color = self.background;
        visuals.override_text_color = Some(self.text_primary);
        visuals.selection.bg_fill = self.accent.gamma_multiply(0.35);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        let strokes = [
            (&mut visuals.widgets.noninteractive, self.text_secondary, 1.0),
            (&mut visuals.widgets.inactive, self.text_primary, 1.0),
            (&mut visuals.widgets.hovered, self.accent, 1.5),
            (&mut visuals.widgets.active, self.accent, 2.0),
        ];
        for (widget, color, width) in strokes {
            widget.fg_stroke = Stroke::new(width, color);
            widget.corner_radius = ROUNDING;
        }
        visuals
    }

    /// Activity line color.
    pub fn log_color(&self, committed: bool) -> Color32 {
        if committed {
            self.log_commit
        } else {
            self.log_reject
        }
    }
}
