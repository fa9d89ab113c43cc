//! Config file inspection and saving.

use crate::config::{self, Config};
use crate::error::ResultExt;

use super::Cli;

/// Print where the config lives and which keys are set, optionally saving it
pub fn cmd_config(cli: &Cli, config: &Config, save: bool) -> anyhow::Result<()> {
    let path = cli.config.clone().or_else(config::config_path);
    match &path {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (no config directory on this system)"),
    }

    println!(
        "  Goodreads key: {}",
        key_status(&config.credentials.goodreads_key)
    );
    println!("  ISBNdb key:    {}", key_status(&config.credentials.isbndb_key));
    println!("  Goodreads URL: {}", config.services.goodreads_base_url);
    println!("  ISBNdb URL:    {}", config.services.isbndb_base_url);
    println!("  Author sample: {}", config.services.author_sample_size);

    if save {
        let written = match &cli.config {
            Some(path) => config::save_to(config, path)
                .map(|_| path.clone())
                .with_context("saving config")?,
            None => config::save(config).with_context("saving config")?,
        };
        println!();
        println!("Saved to {}", written.display());
    }

    Ok(())
}

fn key_status(key: &Option<String>) -> &'static str {
    match key.as_deref().map(str::trim) {
        Some(k) if !k.is_empty() => "set",
        _ => "not set",
    }
}
