use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scenematch")]
#[command(author, version, about = "Season and episode guessing for media filenames")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read 3-4 digit numbers as absolute episode numbers
    #[arg(long, global = true)]
    pub prefer_number: bool,

    /// Known title whose numbers are not episodes (repeatable)
    #[arg(short, long = "title", global = true)]
    pub titles: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Guess season and episode numbers from filenames or paths
    Guess {
        /// Inputs to parse (one per line on stdin if omitted)
        inputs: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every final match, marker and rule outcome for one input
    Explain {
        /// Input to parse
        #[arg(required = true)]
        input: String,

        /// Include private parent matches
        #[arg(long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the registered patterns
    Patterns,

    /// List the disambiguation rules in the order they run
    Rules,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
