//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\book-genres\config.toml
//! - macOS: ~/Library/Application Support/book-genres/config.toml
//! - Linux: ~/.config/book-genres/config.toml
//!
//! The file holds the two developer keys and, optionally, alternate
//! service roots. Keys given on the command line win over the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::lookup::LookupConfig;
use crate::lookup::aggregator::DEFAULT_AUTHOR_SAMPLE_SIZE;
use crate::lookup::{goodreads, isbndb};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials
    pub credentials: Credentials,

    /// Service endpoints and lookup tuning
    pub services: ServicesConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Goodreads developer key for searches and works lists
    pub goodreads_key: Option<String>,

    /// ISBNdb access key for subject lookups
    pub isbndb_key: Option<String>,
}

/// Service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Goodreads service root
    pub goodreads_base_url: String,

    /// ISBNdb service root
    pub isbndb_base_url: String,

    /// Number of an author's works sampled for author genres
    pub author_sample_size: usize,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            goodreads_base_url: goodreads::DEFAULT_BASE_URL.to_string(),
            isbndb_base_url: isbndb::DEFAULT_BASE_URL.to_string(),
            author_sample_size: DEFAULT_AUTHOR_SAMPLE_SIZE,
        }
    }
}

impl Config {
    /// Replace credentials with any values given explicitly
    pub fn with_overrides(mut self, goodreads_key: Option<&str>, isbndb_key: Option<&str>) -> Self {
        if let Some(key) = goodreads_key {
            self.credentials.goodreads_key = Some(key.to_string());
        }
        if let Some(key) = isbndb_key {
            self.credentials.isbndb_key = Some(key.to_string());
        }
        self
    }

    /// Build the lookup configuration, failing if a key is missing
    pub fn lookup_config(&self) -> Result<LookupConfig> {
        let goodreads_key = present(&self.credentials.goodreads_key)
            .ok_or_else(|| Error::config("Goodreads developer key is not set"))?;
        let isbndb_key = present(&self.credentials.isbndb_key)
            .ok_or_else(|| Error::config("ISBNdb access key is not set"))?;

        if self.services.author_sample_size == 0 {
            return Err(Error::config("author_sample_size must be at least 1"));
        }

        Ok(LookupConfig {
            goodreads_key: goodreads_key.to_string(),
            isbndb_key: isbndb_key.to_string(),
            goodreads_base_url: self.services.goodreads_base_url.clone(),
            isbndb_base_url: self.services.isbndb_base_url.clone(),
            author_sample_size: self.services.author_sample_size,
        })
    }
}

fn present(key: &Option<String>) -> Option<&str> {
    key.as_deref().map(str::trim).filter(|k| !k.is_empty())
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("book-genres"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from a specific file, with the same fallbacks as [`load`]
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location
pub fn save(config: &Config) -> std::result::Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> std::result::Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    // Serialize to pretty TOML
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
