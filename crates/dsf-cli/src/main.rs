//! DSF CLI - offline host tooling for the dual spread filter.

mod commands;
mod wav;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dsf")]
#[command(author, version, about = "Dual spread filter host tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a WAV file through the spread filter
    Process(commands::process::ProcessArgs),

    /// Show derived parameters and frequency images for a panel setting
    Images(commands::images::ImagesArgs),

    /// List the panel's controls and their positions for a setting
    Panel(commands::panel::PanelArgs),

    /// List factory presets, or print one as TOML
    Presets(commands::presets::PresetsArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Images(args) => commands::images::run(args),
        Commands::Panel(args) => commands::panel::run(args),
        Commands::Presets(args) => commands::presets::run(args),
    }
}
