use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `brandtaste` - infer a design-preference profile from brand swipes.
#[derive(Parser, Debug)]
#[command(name = "brandtaste")]
#[command(version)]
#[command(about = "Infer design preferences from liked and disliked brand designs.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.brandtaste/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the built-in brand designs
    Catalog,

    /// Show the effective configuration
    Status,

    /// Print the compiled inference prompt for a swipe file
    Prompt {
        /// JSON swipe file: a record list or {"userId", "swipes"}
        #[arg(short, long)]
        swipes: PathBuf,
    },

    /// Infer a preference profile (AI first, statistical fallback)
    Infer {
        /// JSON swipe file: a record list or {"userId", "swipes"}
        #[arg(short, long)]
        swipes: PathBuf,

        /// Skip the AI call and use the statistical estimator only
        #[arg(long)]
        offline: bool,

        /// Write the profile here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the raw AI response to stderr
        #[arg(long)]
        show_raw: bool,
    },

    /// Parse and validate a saved AI response
    Validate {
        /// File holding the raw model output
        file: PathBuf,
    },
}
