//! Trait definitions for the external services.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! substitute the mocks below, which serve XML fixtures.
//!
//! The traits hand back parsed documents rather than domain types: the
//! extraction rules live in the adapters and are applied by the resolver
//! and aggregator, so mocks exercise exactly the same rules as production.
//! `Ok(None)` means the service answered "no such resource".

use async_trait::async_trait;

use super::domain::{AuthorId, Isbn, LookupError};
use super::xml::XmlDocument;

/// Ranked-search service (Goodreads).
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Popularity-ranked search for free text.
    async fn search(&self, query: &str) -> Result<Option<XmlDocument>, LookupError>;

    /// Details of the best match for a title.
    async fn title_detail(&self, title: &str) -> Result<Option<XmlDocument>, LookupError>;

    /// First page of an author's works.
    async fn author_works(&self, author_id: &AuthorId)
    -> Result<Option<XmlDocument>, LookupError>;
}

/// Catalog service (ISBNdb).
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Subject listing for an ISBN.
    async fn subjects(&self, isbn: &Isbn) -> Result<Option<XmlDocument>, LookupError>;
}

// Implement traits for real clients

#[async_trait]
impl SearchApi for super::goodreads::GoodreadsClient {
    async fn search(&self, query: &str) -> Result<Option<XmlDocument>, LookupError> {
        self.search(query).await
    }

    async fn title_detail(&self, title: &str) -> Result<Option<XmlDocument>, LookupError> {
        self.title_detail(title).await
    }

    async fn author_works(
        &self,
        author_id: &AuthorId,
    ) -> Result<Option<XmlDocument>, LookupError> {
        self.author_works(author_id).await
    }
}

#[async_trait]
impl CatalogApi for super::isbndb::IsbndbClient {
    async fn subjects(&self, isbn: &Isbn) -> Result<Option<XmlDocument>, LookupError> {
        self.subjects(isbn).await
    }
}
