//! Detent GUI - a desktop panel of rotary dials.
//!
//! Loads a panel (factory or TOML file), lays its knobs out in a grid of
//! [`detent_gui_core::Dial`] widgets and logs every change they report.

pub mod activity;
pub mod app;

pub use activity::{ActivityLog, LogEntry};
pub use app::DetentApp;
