//! Shared GUI components for detent dials.
//!
//! This crate turns a [`detent_core::KnobState`] into pixels. The state keeps
//! all of the gesture and value logic; everything here is presentation.
//!
//! # Modules
//!
//! - [`appearance`]: Resolved colors and sizes for one dial
//! - [`render`]: Pure geometry for the marker sweep, knob rect and label
//! - [`theme`]: Visual styling constants and egui theme application
//! - [`widgets`]: The [`Dial`] egui widget

pub mod appearance;
pub mod render;
pub mod theme;
pub mod widgets;

pub use appearance::Appearance;
pub use render::{RenderState, format_label, marker_sweep_end, polar_point, to_knob_frame};
pub use theme::Theme;
pub use widgets::Dial;
