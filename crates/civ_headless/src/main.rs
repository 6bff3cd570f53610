//! Headless game runner.
//!
//! Boots a session without graphics and prints a JSON summary.
//!
//! # Usage
//!
//! ```bash
//! # Resume the autosave, or start a new game if there is none
//! cargo run -p civ_headless -- run
//!
//! # Start a new game with a fixed seed and a custom world
//! cargo run -p civ_headless -- --seed 42 --config world.ron new-game
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use civ_headless::{default_ruleset_dir, run_session, HeadlessConfig, SessionAction};

#[derive(Parser)]
#[command(name = "civ_headless")]
#[command(about = "Headless game runner: bootstrap a session and print a JSON summary")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Ruleset directory (defaults to the bundled assets)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Save directory
    #[arg(long, global = true, default_value = "saves")]
    save_dir: PathBuf,

    /// World configuration file (RON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random seed for new worlds
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resume the autosave, or start a new game if it is missing or unusable
    Run,

    /// Start a new game regardless of the autosave
    NewGame {
        /// Keep tutorial progress from the current session
        #[arg(long)]
        keep_tutorials: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the summary
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let Some(data_dir) = cli.data_dir.clone().or_else(default_ruleset_dir) else {
        tracing::error!("No ruleset directory found; pass --data-dir");
        std::process::exit(1);
    };

    let action = match cli.command {
        Some(Commands::NewGame { keep_tutorials }) => SessionAction::NewGame { keep_tutorials },
        Some(Commands::Run) | None => SessionAction::Resume,
    };

    let mut config = HeadlessConfig::new(data_dir, cli.save_dir).with_action(action);
    config.world_config = cli.config;
    config.seed = cli.seed;

    let summary = match run_session(&config) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!(error = %e, "Session bootstrap failed");
            std::process::exit(1);
        }
    };

    match summary.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize summary");
            std::process::exit(1);
        }
    }
}
