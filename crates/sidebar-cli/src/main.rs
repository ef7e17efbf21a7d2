//! `sidebar` - inspect how a theme's sidebar configuration resolves.
//!
//! Every command prints JSON on stdout. Without `--config` the theme's
//! shipped configuration is used.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sidebar_core::{Side, Slot};

/// Sidebar widget layout inspector
#[derive(Parser)]
#[command(name = "sidebar")]
#[command(version, about = "Resolve sidebar widget layouts for a blog theme")]
struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the configuration and summarize it
    Check,

    /// Print the full render plan for a page
    Plan {
        /// Render for an article (detail) page
        #[arg(long)]
        detail: bool,
    },

    /// Print the column structure per device class
    Grid {
        /// Render for an article (detail) page
        #[arg(long)]
        detail: bool,
    },

    /// List enabled widgets in render order
    Widgets {
        /// Only this side (left or right)
        #[arg(long)]
        side: Option<Side>,
        /// Only this slot (top or sticky)
        #[arg(long)]
        slot: Option<Slot>,
    },

    /// Classify a viewport width
    Device {
        /// Width in CSS pixels
        width: u32,
        /// Smallest tablet width
        #[arg(long, default_value_t = 768)]
        tablet_min: u32,
        /// Smallest desktop width
        #[arg(long, default_value_t = 1024)]
        desktop_min: u32,
    },

    /// Write the shipped configuration as TOML
    Init {
        /// Destination file
        #[arg(long, default_value = "sidebar.toml")]
        output: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = cli.config;
    let load = || commands::load_manager(config.as_deref());

    match cli.command {
        Command::Check => commands::check(&load()?),
        Command::Plan { detail } => commands::plan(&load()?, detail),
        Command::Grid { detail } => commands::grid(&load()?, detail),
        Command::Widgets { side, slot } => commands::widgets(&load()?, side, slot),
        Command::Device {
            width,
            tablet_min,
            desktop_min,
        } => commands::device(width, tablet_min, desktop_min),
        Command::Init { output, force } => commands::init(&output, force),
    }
}
