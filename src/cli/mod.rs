//! Command-line interface for book-genres.
//!
//! This module provides a demo that prints genre lookups for a title and an
//! author, plus a command for inspecting and writing the config file.

mod commands;

pub use commands::{Cli, Commands, run_command};
