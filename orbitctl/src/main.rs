use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::simulate::Flick;

#[derive(Parser)]
#[command(
    name = "orbitctl",
    about = "Inspect orbit carousel configs and run headless sessions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load and validate the carousel configuration
    Check {
        /// Config file; defaults to the environment/candidate lookup
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print one projected frame as JSON
    Project {
        #[arg(long)]
        slides: usize,
        /// Fractional circular position (wrapped into range)
        #[arg(long, allow_negative_numbers = true)]
        position: f32,
        #[arg(long)]
        width: f32,
        #[arg(long, default_value_t = 600.0)]
        height: f32,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run a deterministic session and print state changes as JSON lines
    Simulate {
        #[arg(long)]
        slides: usize,
        #[arg(long)]
        width: f32,
        #[arg(long, default_value_t = 600.0)]
        height: f32,
        #[arg(long)]
        duration_ms: u64,
        /// Frame rate of the simulated clock, at most one frame per microsecond
        #[arg(
            long,
            default_value_t = 60,
            value_parser = clap::value_parser!(u32)
                .range(1..=i64::from(commands::simulate::MAX_FPS)),
        )]
        fps: u32,
        /// Drag of DX pixels over MS milliseconds at t = 0, e.g. -400:200
        #[arg(long, allow_hyphen_values = true)]
        flick: Option<Flick>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { config } => commands::check::run(config.as_deref()),
        Command::Project {
            slides,
            position,
            width,
            height,
            config,
        } => commands::project::run(
            config.as_deref(),
            slides,
            position,
            width,
            height,
        ),
        Command::Simulate {
            slides,
            width,
            height,
            duration_ms,
            fps,
            flick,
            config,
        } => commands::simulate::run(
            config.as_deref(),
            commands::simulate::Session {
                slides,
                width,
                height,
                duration_ms,
                fps,
                flick,
            },
        ),
    }
}
