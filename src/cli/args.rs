//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// prefill - Turn a tutoring intake form into a prefilled scheduling link
#[derive(Parser, Debug)]
#[command(name = "prefill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tutor-facing summary of an answers file
    Summary {
        /// Answers file (.json or .toml, `-` for stdin)
        #[arg(short, long)]
        answers: PathBuf,
    },

    /// Print the prefill payload built from an answers file
    Build {
        /// Answers file (.json or .toml, `-` for stdin)
        #[arg(short, long)]
        answers: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the prefilled scheduling widget URL
    Url {
        /// Answers file (.json or .toml, `-` for stdin)
        #[arg(short, long)]
        answers: PathBuf,

        /// Widget URL (defaults to widget.base_url from config)
        #[arg(short, long)]
        base_url: Option<String>,
    },

    /// Show which course option a subject maps to
    Classify {
        /// Subject text as the client typed it
        subject: String,
    },

    /// List the intake questions and their allowed answers
    Questions,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
