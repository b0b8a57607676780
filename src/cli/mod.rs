//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_color, format_dashboard, format_entry_cards, format_timeline};
