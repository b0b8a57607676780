//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ahora")]
#[command(about = "Build-in-public diary dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read diary files from nested folders too
    #[arg(long, global = true)]
    pub recursive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site (site.toml and content/diary/)
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Show the build dashboard
    Dashboard {
        /// Day to cut off at (YYYY-MM-DD); must have an entry
        #[arg(long, value_name = "DATE")]
        day: Option<String>,

        /// ISO week number to select
        #[arg(long)]
        week: Option<u32>,

        /// Ignore the default selection and include every entry
        #[arg(long, conflicts_with_all = ["day", "week"])]
        all: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        today: Option<String>,
    },

    /// List weeks and days that have entries
    Timeline {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show entry cards (latest five, or one day)
    Entries {
        /// Only entries of this day (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        day: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the balance color for a percentage
    Color {
        /// Category share in percent
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },
}
