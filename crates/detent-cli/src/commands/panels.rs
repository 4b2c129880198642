//! Panel listing.

use std::path::PathBuf;

use clap::Args;
use detent_config::{
    Panel, factory_panel_names, get_factory_panel, list_user_panels, panel_name_from_path,
    user_panels_dir, validate_panel,
};

#[derive(Args)]
pub struct PanelsArgs {
    /// Show the knobs of one panel file and validate it
    #[arg(long)]
    file: Option<PathBuf>,
}

pub fn run(args: PanelsArgs) -> anyhow::Result<()> {
    match args.file {
        Some(path) => show_file(&path),
        None => {
            list_panels();
            Ok(())
        }
    }
}

fn list_panels() {
    println!("Factory Panels:");
    println!("===============");
    for id in factory_panel_names() {
        if let Some(panel) = get_factory_panel(id) {
            let desc = panel.description.as_deref().unwrap_or("");
            println!("  {:12} {:>2} knobs - {}", id, panel.len(), desc);
        }
    }
    println!();

    println!("User Panels ({}):", user_panels_dir().display());
    println!("============");
    let user_panels = list_user_panels();
    if user_panels.is_empty() {
        println!("  (none)");
    }
    for path in user_panels {
        let name = panel_name_from_path(&path).unwrap_or_else(|| "unknown".to_string());
        match Panel::load(&path) {
            Ok(panel) => {
                let desc = panel.description.as_deref().unwrap_or("");
                println!("  {:12} {:>2} knobs - {}", name, panel.len(), desc);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable panel");
                println!("  {name:12} (error loading)");
            }
        }
    }
}

fn show_file(path: &std::path::Path) -> anyhow::Result<()> {
    let panel = Panel::load(path)?;

    println!("{}", panel.name);
    if let Some(desc) = &panel.description {
        println!("{desc}");
    }
    println!("{} knobs in {} columns", panel.len(), panel.columns);
    println!();
    println!(
        "  {:12} {:>10} {:>10} {:>8} {:>10}",
        "name", "min", "max", "step", "value"
    );
    for knob in panel.iter() {
        let value = knob
            .value
            .map_or_else(|| "-".to_string(), |v| format!("{v}"));
        println!(
            "  {:12} {:>10} {:>10} {:>8} {:>10}",
            knob.name, knob.min, knob.max, knob.step, value
        );
    }
    println!();

    validate_panel(&panel)?;
    println!("Panel is valid.");
    Ok(())
}
