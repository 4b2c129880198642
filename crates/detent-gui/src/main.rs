//! Detent GUI - a desktop panel of rotary dials.

use clap::Parser;
use detent_config::open_panel;
use detent_gui::DetentApp;
use detent_gui::app::DEFAULT_DIAL_SIZE;
use eframe::egui;

/// Detent dial panel.
#[derive(Parser, Debug)]
#[command(name = "detent-gui")]
#[command(about = "Panel of rotary dials with angle snapping")]
#[command(version)]
struct Args {
    /// Panel to open: a factory panel name, a user panel name or a TOML path
    #[arg(long)]
    panel: Option<String>,

    /// Dial edge length in points
    #[arg(long, default_value_t = DEFAULT_DIAL_SIZE)]
    dial_size: f32,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();
    tracing::info!("Starting Detent GUI");

    let initial = args.panel.as_deref().and_then(|name| match open_panel(name) {
        Ok(panel) => Some(panel),
        Err(e) => {
            tracing::error!(panel = %name, error = %e, "could not open panel, using default");
            None
        }
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title("Detent"),
        ..Default::default()
    };

    let dial_size = args.dial_size;
    eframe::run_native(
        "Detent",
        options,
        Box::new(move |cc| Ok(Box::new(DetentApp::new(cc, initial, dial_size)))),
    )
}
