//! Hexciv - Development Tools

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "civ-tools")]
#[command(about = "Development tools for Hexciv")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and link a ruleset directory
    Validate {
        /// Path to ruleset directory
        #[arg(default_value = "crates/civ_headless/assets/ruleset")]
        path: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => {
            tracing::info!("Validating ruleset in: {path}");
            match civ_tools::validate::validate_data_directory(std::path::Path::new(&path)) {
                Ok(report) => {
                    tracing::info!("Validation passed: {report}");
                    for warning in &report.warnings {
                        tracing::warn!("{warning}");
                    }
                }
                Err(e) => {
                    tracing::error!("Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
