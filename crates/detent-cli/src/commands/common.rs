//! Shared CLI helpers used across multiple commands.

use detent_config::{ConfigError, KnobSpec, Panel, open_panel};

/// Load a panel by factory name, user panel name or file path.
pub fn load_panel(name: &str) -> anyhow::Result<Panel> {
    match open_panel(name) {
        Ok(panel) => Ok(panel),
        Err(ConfigError::PanelNotFound(_)) => anyhow::bail!(
            "Panel '{}' not found. Use 'detent panels' to see available panels.",
            name
        ),
        Err(e) => Err(e.into()),
    }
}

/// Load a panel and pick one knob from it.
pub fn load_knob(panel: &str, knob: &str) -> anyhow::Result<(Panel, KnobSpec)> {
    let panel = load_panel(panel)?;
    let spec = panel.require_knob(knob)?.clone();
    Ok((panel, spec))
}
