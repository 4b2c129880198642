//! Detent CLI - inspect panels and replay gestures without a window.

mod commands;
mod script;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "detent")]
#[command(author, version, about = "Detent rotary dial CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List factory and user panels, or show one panel file
    Panels(commands::panels::PanelsArgs),

    /// Show a knob's configuration and its table of stops
    Inspect(commands::inspect::InspectArgs),

    /// Resolve a pointer offset to its quadrant and dial angle
    Resolve(commands::resolve::ResolveArgs),

    /// Feed a gesture script to a knob and print every outcome
    Replay(commands::replay::ReplayArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Panels(args) => commands::panels::run(args),
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Replay(args) => commands::replay::run(args),
    }
}
