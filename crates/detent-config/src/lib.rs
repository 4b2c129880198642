//! Panel files and knob configuration for detent dials.
//!
//! A panel is a named grid of knobs stored as TOML. This crate loads and
//! saves panels, validates them, turns knob specs into live
//! [`detent_core::KnobState`] values, and ships a couple of factory panels.
//!
//! # Features
//!
//! - **Panels**: Load and save knob grids from TOML files
//! - **Knob specs**: Range, step, snapping and appearance per knob
//! - **Validation**: Collect every problem in a panel before building it
//! - **Paths**: Platform-specific user panel directory
//! - **Factory Panels**: Built-in panels that need no files
//!
//! # Example
//!
//! ```rust,no_run
//! use detent_config::{KnobSpec, Panel, user_panels_dir, validate_panel};
//!
//! let panel = Panel::new("Mixer")
//!     .with_description("Channel strip")
//!     .with_knob(KnobSpec::new("gain").with_range(-12.0, 12.0).with_step(0.5))
//!     .with_knob(KnobSpec::new("pan").with_range(-50.0, 50.0).with_value(0.0));
//! validate_panel(&panel).unwrap();
//!
//! panel.save(user_panels_dir().join("mixer.toml")).unwrap();
//! let knobs = panel.build_states().unwrap();
//! assert_eq!(knobs.len(), 2);
//! ```

mod error;
mod knob_spec;
mod panel;

/// Platform-specific paths for panel files.
pub mod paths;

/// Knob and panel validation.
pub mod validation;

/// Factory panels bundled with the library.
pub mod factory_panels;

pub use error::ConfigError;
pub use factory_panels::{
    FACTORY_PANEL_NAMES, factory_panel_names, factory_panels, get_factory_panel, is_factory_panel,
};
pub use knob_spec::{AppearanceSpec, ColorSpec, KnobSpec, QuantizeSetting, ValuePolicySetting};
pub use panel::Panel;
pub use paths::{
    ensure_user_panels_dir, find_panel, list_user_panels, open_panel, panel_name_from_path,
    user_config_dir, user_panels_dir,
};
pub use validation::{ValidationError, ValidationResult, validate_knob, validate_panel};
