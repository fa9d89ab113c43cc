//! Genre lookup module - resolves titles and authors on Goodreads and
//! collects their subject headings from ISBNdb.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - identifiers, genre sets, errors
//! - **XML access** (`xml.rs`) - a small owned tree over `quick-xml`
//! - **Transport** (`transport.rs`) - form POSTs carrying the developer key
//! - **Clients** (`goodreads/`, `isbndb/`) - one per external service
//! - **Adapters** - the positional extraction rules for each service
//! - **Resolver** (`resolver.rs`) - free text to Goodreads identifiers
//! - **Aggregator** (`aggregator.rs`) - the two-hop pipeline to genres
//! - **Normalize** (`normalize.rs`) - subject cleanup and genre filtering
//! - **Service** (`service.rs`) - the aggregator wired to the real clients
//!
//! Everything is sequential: each step awaits one request before the next
//! is sent, and nothing is cached between calls.
//!
//! # Usage
//!
//! ```ignore
//! use lookup::{GenreService, LookupConfig};
//!
//! let config = LookupConfig {
//!     goodreads_key: "your-goodreads-key".to_string(),
//!     isbndb_key: "your-isbndb-key".to_string(),
//!     ..Default::default()
//! };
//! let service = GenreService::from_config(&config)?;
//!
//! println!("{}", service.title_genre("The Big Sleep").await);
//! println!("{}", service.author_genre("Raymond Chandler").await);
//! ```

pub mod aggregator;
pub mod domain;
pub mod goodreads;
pub mod isbndb;
pub mod normalize;
pub mod resolver;
pub mod service;
pub mod traits;
pub mod transport;
pub mod xml;

pub use aggregator::CategoryAggregator;
pub use domain::{AuthorId, Genres, Isbn, LookupError, TitleId, TitleQuery};
pub use resolver::CatalogResolver;
pub use service::{GenreService, LookupConfig, author_genre, title_genre};
