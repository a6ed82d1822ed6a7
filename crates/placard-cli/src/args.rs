//! Command-line argument definitions for the Placard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the item and layout to preview, the
//! renderer directory, the acting user, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Placard layout previewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the items file (TOML)
    #[arg(help = "Path to the items file")]
    pub items: String,

    /// Id of the item to render
    #[arg(short, long)]
    pub item: String,

    /// Dotted layout path, e.g. `item.full`
    #[arg(short, long, default_value = "item.full")]
    pub layout: String,

    /// Renderer directory holding `positions.toml` and `config.toml` files
    #[arg(short, long)]
    pub root: Option<String>,

    /// Path to the output HTML file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Element template style for every position
    #[arg(long)]
    pub style: Option<String>,

    /// Id of the acting user (guest if omitted)
    #[arg(long)]
    pub user: Option<String>,

    /// Access group of the acting user, repeatable
    #[arg(long = "group")]
    pub groups: Vec<String>,

    /// Report which positions produce output instead of rendering
    #[arg(long)]
    pub check: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
