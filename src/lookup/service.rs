//! Genre service - the aggregator wired to the real Goodreads and ISBNdb clients.
//!
//! This is the high-level API for genre lookups:
//! 1. Resolve the title's ISBN (or the author's ID and works) on Goodreads
//! 2. Fetch subject headings from ISBNdb
//! 3. Clean, split and filter them into a genre set

use super::aggregator::{CategoryAggregator, DEFAULT_AUTHOR_SAMPLE_SIZE};
use super::domain::{Genres, LookupError};
use super::goodreads::{self, GoodreadsClient};
use super::isbndb::{self, IsbndbClient};
use super::resolver::CatalogResolver;

/// Configuration for the genre service
///
/// Credentials are held for the lifetime of the clients built from this
/// config and are never read from anywhere else.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Goodreads developer key (https://www.goodreads.com/api/keys)
    pub goodreads_key: String,
    /// ISBNdb access key (https://isbndb.com/account/dev/keys)
    pub isbndb_key: String,
    /// Goodreads service root
    pub goodreads_base_url: String,
    /// ISBNdb service root
    pub isbndb_base_url: String,
    /// How many of an author's works to aggregate
    pub author_sample_size: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            goodreads_key: String::new(),
            isbndb_key: String::new(),
            goodreads_base_url: goodreads::DEFAULT_BASE_URL.to_string(),
            isbndb_base_url: isbndb::DEFAULT_BASE_URL.to_string(),
            author_sample_size: DEFAULT_AUTHOR_SAMPLE_SIZE,
        }
    }
}

/// Aggregator over the production clients
pub type GenreService = CategoryAggregator<GoodreadsClient, IsbndbClient>;

impl GenreService {
    /// Build the clients and wire them together
    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        let goodreads =
            GoodreadsClient::with_base_url(&config.goodreads_key, &config.goodreads_base_url)?;
        let isbndb = IsbndbClient::with_base_url(&config.isbndb_key, &config.isbndb_base_url)?;

        Ok(CategoryAggregator::new(CatalogResolver::new(goodreads), isbndb)
            .with_author_sample_size(config.author_sample_size))
    }
}

/// Quick helper to look up a title's genres without keeping a service around
pub async fn title_genre(title: &str, config: &LookupConfig) -> Genres {
    match GenreService::from_config(config) {
        Ok(service) => service.title_genre(title).await,
        Err(e) => {
            tracing::warn!("Could not build genre service: {}", e);
            Genres::NoneFound
        }
    }
}

/// Quick helper to look up an author's genres without keeping a service around
pub async fn author_genre(author: &str, config: &LookupConfig) -> Genres {
    match GenreService::from_config(config) {
        Ok(service) => service.author_genre(author).await,
        Err(e) => {
            tracing::warn!("Could not build genre service: {}", e);
            Genres::NoneFound
        }
    }
}
