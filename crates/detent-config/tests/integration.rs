//! Integration tests for detent-config.
//!
//! These tests exercise files, factory panels and live knobs together.

use detent_config::{
    AppearanceSpec, ConfigError, KnobSpec, Panel, ValidationError, factory_panels,
    get_factory_panel, validate_panel,
};
use detent_core::{GestureOutcome, Point, QuantizeMode};
use tempfile::TempDir;

/// Save a panel, load it back, and drive the reloaded knob.
#[test]
fn test_panel_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("mixer.toml");

    let panel = Panel::new("Mixer")
        .with_description("Round trip through disk")
        .with_columns(2)
        .with_knob(
            KnobSpec::new("gain")
                .with_range(-12.0, 12.0)
                .with_step(0.5)
                .with_value(0.0),
        )
        .with_knob(KnobSpec::new("level").with_appearance(AppearanceSpec {
            knob_size: 0.7,
            show_label: false,
            ..AppearanceSpec::default()
        }));

    panel.save(&path).expect("save should create parent directories");
    let loaded = Panel::load(&path).unwrap();
    assert_eq!(loaded, panel);

    let mut gain = loaded.require_knob("gain").unwrap().build_state().unwrap();
    assert_eq!(gain.value(), 0.0);
    assert_eq!(gain.angle(), 180.0);

    // Quarter turn clockwise from straight up.
    let outcome = gain.press(Point::new(10.0, 0.0));
    assert!(outcome.is_committed());
}

/// Every factory panel validates and yields live knobs.
#[test]
fn test_factory_panels_build() {
    for panel in factory_panels() {
        validate_panel(&panel).unwrap();
        let knobs = panel.build_states().unwrap();
        assert_eq!(knobs.len(), panel.len(), "panel '{}'", panel.name);
    }
}

/// The coarse demo knob snaps to 89 degree stops.
#[test]
fn test_stepped_demo_knob_drag() {
    let demo = get_factory_panel("demo").unwrap();
    let mut knob = demo.require_knob("stepped").unwrap().build_state().unwrap();

    match knob.press(Point::new(10.0, 0.0)) {
        GestureOutcome::Committed { angle, .. } => assert_eq!(angle, 89.0),
        other => panic!("unexpected outcome: {other:?}"),
    }
    // Straight down is one stop further.
    match knob.move_to(Point::new(0.0, -10.0)) {
        GestureOutcome::Committed { angle, .. } => assert_eq!(angle, 178.0),
        other => panic!("unexpected outcome: {other:?}"),
    }
    knob.release();
    assert_eq!(knob.move_to(Point::new(-10.0, 0.0)), GestureOutcome::Ignored);
}

/// The exact-mode studio gain knob keeps fractional stops.
#[test]
fn test_studio_gain_is_exact() {
    let studio = get_factory_panel("studio").unwrap();
    let gain = studio.require_knob("gain").unwrap().build_state().unwrap();
    assert_eq!(gain.quantizer().mode(), QuantizeMode::Exact);
    assert_eq!(gain.min(), -12.0);
}

/// A broken panel file parses, then fails validation with every problem.
#[test]
fn test_invalid_panel_file_reports_all_problems() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"
name = "Broken"
columns = 0

[[knobs]]
name = "flat"
min = 5.0
max = 5.0

[[knobs]]
name = "flat"
"#,
    )
    .unwrap();

    let panel = Panel::load(&path).unwrap();
    let err = validate_panel(&panel).unwrap_err();
    match &err {
        ValidationError::Multiple(errors) => {
            assert_eq!(errors.len(), 3);
            assert!(errors.contains(&ValidationError::InvalidColumns));
            assert!(errors.contains(&ValidationError::DuplicateKnob("flat".to_string())));
        }
        other => panic!("expected Multiple, got {other:?}"),
    }

    let wrapped: ConfigError = err.into();
    assert!(wrapped.to_string().starts_with("validation failed"));
}

/// Malformed TOML surfaces as a parse error.
#[test]
fn test_malformed_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    std::fs::write(&path, "name = ").unwrap();
    assert!(matches!(Panel::load(&path), Err(ConfigError::TomlParse(_))));
}

/// Loading a missing file reports the path.
#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");
    let err = Panel::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
