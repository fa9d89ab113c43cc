//! Book Genres - genre lookups for books and authors.
//!
//! Titles and authors are resolved through the Goodreads search API, and the
//! subject headings ISBNdb files under the matching ISBNs are cleaned and
//! merged into a set of genre labels.

pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("book_genres=info".parse()?))
        .init();

    cli::run_command(&args)
}
