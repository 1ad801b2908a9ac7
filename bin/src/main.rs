//! moontray CLI - menu-bar companion for Moonraker 3D printers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod display;

use config::{Config, Overrides};

#[derive(Parser)]
#[command(name = "moontray")]
#[command(about = "Menu-bar companion for Moonraker 3D printers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Moonraker API base URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// Camera (mjpg-streamer) base URL
    #[arg(long, global = true)]
    camera_url: Option<String>,

    /// Seconds between polls
    #[arg(long, global = true)]
    interval: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the printer and print the tray title on every update (default)
    Watch,

    /// Poll once and print the title with details
    Status,

    /// Poll once and print an xbar/SwiftBar/Argos plugin menu
    Bar,

    /// Estimate remaining time from values given on the command line
    Estimate {
        /// Fraction of the file consumed (0.0 - 1.0)
        #[arg(short, long)]
        progress: f64,

        /// Elapsed print time in seconds
        #[arg(short, long)]
        duration: f64,

        /// Speed factor
        #[arg(short, long, default_value = "1.0")]
        speed: f64,

        /// Slicer-estimated total time in seconds
        #[arg(long)]
        slicer: Option<f64>,

        /// Actual total time of a completed previous run, in seconds
        #[arg(long)]
        history: Option<f64>,
    },

    /// Show camera URLs or save a snapshot
    Camera {
        /// Save a snapshot frame to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Show the config file location and effective settings
    Config {
        /// Print only the config file path
        #[arg(long)]
        path: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref()).context("Failed to load config")?;
    config.apply(Overrides {
        moonraker_url: cli.url,
        camera_url: cli.camera_url,
        interval_secs: cli.interval,
    });

    init_tracing(cli.verbose, &config);

    match cli.command.unwrap_or(Commands::Watch) {
        Commands::Watch => commands::watch::watch(&config).await,
        Commands::Status => commands::status::status(&config).await,
        Commands::Bar => commands::bar::bar(&config).await,
        Commands::Estimate {
            progress,
            duration,
            speed,
            slicer,
            history,
        } => {
            commands::estimate::estimate_offline(progress, duration, speed, slicer, history);
            Ok(())
        }
        Commands::Camera { save } => commands::camera::camera(&config, save.as_deref()).await,
        Commands::Config { path } => {
            commands::config::show_config(&config, cli.config.as_deref(), path)
        }
    }
}

/// Logs go to stderr so `bar` output stays a clean plugin document.
///
/// `-v` flags win over `RUST_LOG`, which wins over the config file level.
fn init_tracing(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
