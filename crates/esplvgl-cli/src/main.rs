//! esplvgl - LVGL display designer, headless driver
//!
//! Replays widget scripts against a design canvas and exports the result as
//! ESPHome LVGL configuration.

mod commands;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// ESPHome LVGL layout exporter
#[derive(Parser, Debug)]
#[command(name = "esplvgl")]
#[command(author, version, about = "Compose LVGL widgets and export ESPHome YAML")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a widget script and write the YAML document
    Export(commands::export::ExportArgs),

    /// List widget kinds with their default size and palette
    Kinds(commands::kinds::KindsArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Export(args) => commands::export::run(args),
        Commands::Kinds(args) => commands::kinds::run(args),
    }
}
