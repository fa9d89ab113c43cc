//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `demo`: Genre lookups for a sample title and author
//! - `config`: Config file location, key status and saving

mod config;
mod demo;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

pub use config::cmd_config;
pub use demo::cmd_demo;

/// Title looked up when none is given
pub const DEFAULT_TITLE: &str = "Jonathan Strange and Mr. Norrell";
/// Author looked up when none is given
pub const DEFAULT_AUTHOR: &str = "Raymond Chandler";
/// Title whose author is resolved when none is given
pub const DEFAULT_AUTHOR_OF: &str = "The Big Sleep";

/// Book genre lookups from Goodreads and ISBNdb
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Goodreads developer key (overrides the config file)
    #[arg(long, global = true)]
    pub goodreads_key: Option<String>,

    /// ISBNdb access key (overrides the config file)
    #[arg(long, global = true)]
    pub isbndb_key: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Look up genres for a title and an author (the default)
    Demo {
        /// Title whose genres are printed
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,
        /// Author whose genres are printed
        #[arg(long, default_value = DEFAULT_AUTHOR)]
        author: String,
        /// Title whose author and identifiers are printed
        #[arg(long, default_value = DEFAULT_AUTHOR_OF)]
        author_of: String,
    },
    /// Show the config file and which keys are set
    Config {
        /// Write the effective config, including keys given on the command line
        #[arg(long)]
        save: bool,
    },
}

/// Run the specified CLI command.
///
/// With no subcommand the demo runs with its default title and author.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli);

    match &cli.command {
        Some(Commands::Demo {
            title,
            author,
            author_of,
        }) => {
            let rt = Runtime::new()?;
            cmd_demo(&rt, &config, title, author, author_of)
        }
        Some(Commands::Config { save }) => cmd_config(cli, &config, *save),
        None => {
            let rt = Runtime::new()?;
            cmd_demo(&rt, &config, DEFAULT_TITLE, DEFAULT_AUTHOR, DEFAULT_AUTHOR_OF)
        }
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Load the config file named on the command line (or the default one) and
/// apply any keys given as flags
pub(crate) fn load_config(cli: &Cli) -> crate::config::Config {
    let config = match &cli.config {
        Some(path) => crate::config::load_from(path),
        None => crate::config::load(),
    };
    config.with_overrides(cli.goodreads_key.as_deref(), cli.isbndb_key.as_deref())
}
