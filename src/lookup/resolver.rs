//! Catalog resolver - turns free text into Goodreads identifiers.
//!
//! Every operation is exactly one request to the search service. "Not
//! found" is an ordinary outcome and comes back as `Ok(None)`; transport
//! and parse failures propagate untouched, so callers decide what a broken
//! service means to them.

use super::domain::{AuthorId, Isbn, LookupError, TitleId};
use super::goodreads::adapter;
use super::traits::SearchApi;

/// Resolves titles and authors against the ranked-search service
pub struct CatalogResolver<S> {
    search: S,
}

impl<S: SearchApi> CatalogResolver<S> {
    pub fn new(search: S) -> Self {
        Self { search }
    }

    /// The underlying search client
    pub fn search_api(&self) -> &S {
        &self.search
    }

    /// Goodreads ID of the top-ranked book for `text`
    pub async fn resolve_title_id(&self, text: &str) -> Result<Option<TitleId>, LookupError> {
        let Some(doc) = self.search.search(text).await? else {
            return Ok(None);
        };
        let id = adapter::best_title_id(&doc);
        tracing::debug!(query = text, title_id = ?id, "Resolved title ID");
        Ok(id)
    }

    /// Goodreads ID of the top-ranked author for `text`
    pub async fn resolve_author_id(&self, text: &str) -> Result<Option<AuthorId>, LookupError> {
        let Some(doc) = self.search.search(text).await? else {
            return Ok(None);
        };
        let id = adapter::best_author_id(&doc);
        tracing::debug!(query = text, author_id = ?id, "Resolved author ID");
        Ok(id)
    }

    /// Display name of the author of `title`
    pub async fn resolve_author_name(&self, title: &str) -> Result<Option<String>, LookupError> {
        let Some(doc) = self.search.title_detail(title).await? else {
            return Ok(None);
        };
        let name = adapter::author_name(&doc);
        tracing::debug!(title, author = ?name, "Resolved author name");
        Ok(name)
    }

    /// ISBN of the best match for `title`
    pub async fn resolve_isbn(&self, title: &str) -> Result<Option<Isbn>, LookupError> {
        let Some(doc) = self.search.title_detail(title).await? else {
            return Ok(None);
        };
        let isbn = adapter::title_isbn(&doc);
        tracing::debug!(title, isbn = ?isbn, "Resolved ISBN");
        Ok(isbn)
    }

    /// ISBNs on the first page of an author's works, in page order
    pub async fn author_work_isbns(&self, author_id: &AuthorId) -> Result<Vec<Isbn>, LookupError> {
        let Some(doc) = self.search.author_works(author_id).await? else {
            return Ok(Vec::new());
        };
        let isbns = adapter::work_isbns(&doc);
        tracing::debug!(author_id = %author_id, count = isbns.len(), "Fetched author works");
        Ok(isbns)
    }
}
