//! Goodreads HTTP client
//!
//! Three endpoints are used, all POSTed with the developer key as `key`:
//! - `search.xml` (`q=`) - popularity-ranked works for free text
//! - `book/title.xml` (`title=`) - details of the best match for a title
//! - `author/list/<id>.xml` - first page of an author's books

use crate::lookup::domain::{AuthorId, LookupError};
use crate::lookup::transport::FormTransport;
use crate::lookup::xml::XmlDocument;

/// Default service root
pub const DEFAULT_BASE_URL: &str = "http://www.goodreads.com";

/// Goodreads API client
pub struct GoodreadsClient {
    transport: FormTransport,
}

impl GoodreadsClient {
    /// Create a client for the public service
    pub fn new(api_key: impl Into<String>) -> Result<Self, LookupError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom service root (mirrors, tests)
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, LookupError> {
        Ok(Self {
            transport: FormTransport::new(base_url, "key", api_key)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Ranked free-text search
    pub async fn search(&self, query: &str) -> Result<Option<XmlDocument>, LookupError> {
        self.transport.post_form("search.xml", &[("q", query)]).await
    }

    /// Details of the best match for a title
    pub async fn title_detail(&self, title: &str) -> Result<Option<XmlDocument>, LookupError> {
        self.transport
            .post_form("book/title.xml", &[("title", title)])
            .await
    }

    /// First page of an author's books
    pub async fn author_works(
        &self,
        author_id: &AuthorId,
    ) -> Result<Option<XmlDocument>, LookupError> {
        let path = format!(
            "author/list/{}.xml",
            urlencoding::encode(author_id.as_str())
        );
        self.transport.post_form(&path, &[]).await
    }
}
