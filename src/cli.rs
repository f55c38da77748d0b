use crate::common::CommonParams;

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, crate_version};
use std::path::PathBuf;

/// CLI structure defining the available commands and global arguments
#[derive(Parser)]
#[command(
    version = crate_version!(),
    about = "pagehist: append Git page history to generated documentation",
    styles = get_styles(),
)]
pub struct Cli {
    /// Subcommands available for the CLI
    #[command(subcommand)]
    pub command: Commands,
}

/// Enumeration of available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Append a page's history and print the result
    #[command(
        about = "Append a page's history and print the result",
        long_about = "Read one markdown page, append its Page History section derived from the Git log of the source file, and print the augmented markdown to stdout."
    )]
    Page {
        #[command(flatten)]
        common: CommonParams,

        /// Markdown source file of the page
        file: PathBuf,

        /// Page identifier checked against the exclusion set
        /// (defaults to the file stem)
        #[arg(long, help = "Page identifier (defaults to the file stem)")]
        page_id: Option<String>,
    },

    /// Augment every page of a docs tree
    #[command(
        about = "Augment every page of a docs tree",
        long_about = "Walk a documentation source tree, append a Page History section to every markdown page, and write the mirrored tree to the output directory."
    )]
    Build {
        #[command(flatten)]
        common: CommonParams,

        /// Documentation source directory
        source: PathBuf,

        /// Output directory for the augmented tree
        out: PathBuf,
    },

    /// Print the extra directories a preview watcher should monitor
    #[command(about = "Print the extra directories a preview watcher should monitor")]
    WatchPaths {
        #[command(flatten)]
        common: CommonParams,
    },
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}
