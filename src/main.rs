//! prefill - Tutoring intake to scheduling-widget prefill
//!
//! Entry point for the prefill CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use prefill::cli::{Cli, Commands};
use prefill::config::Settings;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            prefill::cli::completions::print(shell);
        }
        Commands::Questions => {
            prefill::cli::commands::list_questions()?;
        }
        command => {
            // Load configuration only for commands that use it.
            let settings = Settings::load()?;

            match command {
                Commands::Summary { answers } => {
                    prefill::cli::commands::show_summary(&settings, &answers)?;
                }
                Commands::Build { answers, json } => {
                    prefill::cli::commands::show_prefill(&settings, &answers, json)?;
                }
                Commands::Url { answers, base_url } => {
                    prefill::cli::commands::show_url(&settings, &answers, base_url)?;
                }
                Commands::Classify { subject } => {
                    prefill::cli::commands::classify_subject(&settings, &subject)?;
                }
                Commands::Config(config_cmd) => {
                    prefill::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } | Commands::Questions => unreachable!(),
            }
        }
    }

    Ok(())
}
