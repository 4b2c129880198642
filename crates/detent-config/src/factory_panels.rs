//! Factory panels bundled with the detent library.
//!
//! These panels are always available without external files. `demo`
//! shows the six appearance variants of the stock dial, `studio` shows
//! ranges, steps and policies a mixing surface would use.

use crate::Panel;

/// Array of factory panel names for external access.
pub static FACTORY_PANEL_NAMES: &[&str] = &["demo", "studio"];

/// TOML content for factory panels, embedded at compile time.
static FACTORY_PANELS_TOML: &[(&str, &str)] = &[("demo", DEMO_PANEL), ("studio", STUDIO_PANEL)];

/// Six 0..100 dials with different looks.
const DEMO_PANEL: &str = r#"
name = "Demo"
description = "Stock dial in six appearance variants"
columns = 3

[[knobs]]
name = "plain"
value = 0.0
[knobs.appearance]
font_size = 38.0
font_color = [0.0, 0.0, 0.0, 1.0]
show_marker = false

[[knobs]]
name = "marker"
value = 0.0
[knobs.appearance]
font_size = 38.0
font_color = [0.0, 0.0, 0.0, 1.0]
marker_off_color = [0.3, 0.3, 0.3, 1.0]

[[knobs]]
name = "bare"
value = 0.0
[knobs.appearance]
font_size = 38.0
font_color = [1.0, 1.0, 1.0, 1.0]
knob_color = [0.0, 0.0, 0.0, 0.0]
marker_off_color = [0.0, 0.0, 0.0, 0.0]

[[knobs]]
name = "compact"
value = 0.0
[knobs.appearance]
font_size = 38.0
font_color = [0.0, 0.0, 0.0, 1.0]
marker_off_color = [0.0, 0.0, 0.0, 1.0]
knob_size = 0.7

[[knobs]]
name = "stepped"
step = 25.0
value = 0.0
marker_start_angle = 6.0
marker_ahead = 6.0
[knobs.appearance]
font_size = 30.0
marker_off_color = [0.3, 0.3, 0.3, 1.0]
knob_size = 0.8

[[knobs]]
name = "amber"
value = 0.0
[knobs.appearance]
font_color = [0.996, 0.58, 0.0, 1.0]
marker_off_color = [0.0, 0.0, 0.0, 1.0]
knob_size = 0.9
"#;

/// Mixing-surface controls.
const STUDIO_PANEL: &str = r#"
name = "Studio"
description = "Bipolar, coarse and clamped controls"
columns = 4

[[knobs]]
name = "gain"
min = -12.0
max = 12.0
step = 0.5
value = 0.0
quantize = "exact"

[[knobs]]
name = "pan"
min = -50.0
max = 50.0
value = 0.0

[[knobs]]
name = "mix"
min = 0.0
max = 100.0
step = 5.0
value = 50.0
value_policy = "clamp"

[[knobs]]
name = "tone"
min = 0.0
max = 10.0
drag_jump_limit = 45.0
"#;

/// Get all factory panels.
///
/// # Example
///
/// ```rust
/// use detent_config::factory_panels;
///
/// for panel in factory_panels() {
///     println!("{}: {} knobs", panel.name, panel.len());
/// }
/// ```
pub fn factory_panels() -> Vec<Panel> {
    FACTORY_PANELS_TOML
        .iter()
        .filter_map(|(_, toml)| Panel::from_toml(toml).ok())
        .collect()
}

/// Get a factory panel by name.
///
/// Matches the internal identifier or the panel's display name,
/// case-insensitively.
///
/// ```rust
/// use detent_config::get_factory_panel;
///
/// let demo = get_factory_panel("Demo").unwrap();
/// assert_eq!(demo.len(), 6);
/// ```
pub fn get_factory_panel(name: &str) -> Option<Panel> {
    let name_lower = name.to_lowercase();

    if let Some((_, toml)) = FACTORY_PANELS_TOML
        .iter()
        .find(|(id, _)| id.to_lowercase() == name_lower)
    {
        return Panel::from_toml(toml).ok();
    }

    factory_panels()
        .into_iter()
        .find(|panel| panel.name.to_lowercase() == name_lower)
}

/// Get the internal identifiers of all factory panels.
pub fn factory_panel_names() -> Vec<&'static str> {
    FACTORY_PANELS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a name refers to a factory panel (case-insensitive).
pub fn is_factory_panel(name: &str) -> bool {
    get_factory_panel(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_panel;

    #[test]
    fn test_factory_panels_load() {
        let panels = factory_panels();
        assert_eq!(panels.len(), FACTORY_PANEL_NAMES.len());
        let names: Vec<_> = panels.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Demo", "Studio"]);
    }

    #[test]
    fn test_all_factory_panels_valid() {
        for (name, toml) in FACTORY_PANELS_TOML {
            let panel = Panel::from_toml(toml)
                .unwrap_or_else(|e| panic!("factory panel '{name}' should parse: {e}"));
            assert!(panel.description.is_some(), "'{name}' should have a description");
            validate_panel(&panel)
                .unwrap_or_else(|e| panic!("factory panel '{name}' should validate: {e}"));
            panel.build_states().unwrap();
        }
    }

    #[test]
    fn test_get_factory_panel() {
        assert_eq!(get_factory_panel("demo").unwrap().name, "Demo");
        assert_eq!(get_factory_panel("STUDIO").unwrap().name, "Studio");
        assert!(get_factory_panel("nonexistent").is_none());
    }

    #[test]
    fn test_is_factory_panel() {
        assert!(is_factory_panel("demo"));
        assert!(is_factory_panel("Studio"));
        assert!(!is_factory_panel("my_panel"));
    }

    #[test]
    fn test_factory_panel_names_match_table() {
        assert_eq!(factory_panel_names(), FACTORY_PANEL_NAMES.to_vec());
    }

    #[test]
    fn test_demo_variants() {
        let demo = get_factory_panel("demo").unwrap();
        assert!(!demo.knob("plain").unwrap().appearance.show_marker);
        let stepped = demo.knob("stepped").unwrap();
        assert_eq!(stepped.step, 25.0);
        assert_eq!((stepped.marker_start_angle, stepped.marker_ahead), (6.0, 6.0));
        assert_eq!(demo.knob("compact").unwrap().appearance.knob_size, 0.7);
        for knob in demo.iter() {
            assert_eq!(knob.value, Some(0.0));
        }
    }

    #[test]
    fn test_studio_knobs_build() {
        let studio = get_factory_panel("studio").unwrap();
        let mix = studio.knob("mix").unwrap().build_state().unwrap();
        assert_eq!(mix.value(), 50.0);
        assert_eq!(mix.angle(), 180.0);
        let tone = studio.knob("tone").unwrap().build_state().unwrap();
        assert_eq!(tone.config().drag_jump_limit, 45.0);
    }
}
