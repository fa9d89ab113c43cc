//! ISBNdb HTTP client
//!
//! Uses the v1 `books.xml` method with `results=subjects`, keyed by ISBN.
//! The developer key travels as the `access_key` form field.

use crate::lookup::domain::{Isbn, LookupError};
use crate::lookup::transport::FormTransport;
use crate::lookup::xml::XmlDocument;

/// Default service root
pub const DEFAULT_BASE_URL: &str = "http://isbndb.com/api";

/// ISBNdb API client
pub struct IsbndbClient {
    transport: FormTransport,
}

impl IsbndbClient {
    /// Create a client for the public service
    pub fn new(access_key: impl Into<String>) -> Result<Self, LookupError> {
        Self::with_base_url(access_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom service root (mirrors, tests)
    pub fn with_base_url(
        access_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, LookupError> {
        Ok(Self {
            transport: FormTransport::new(base_url, "access_key", access_key)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Subject listing for a single ISBN
    pub async fn subjects(&self, isbn: &Isbn) -> Result<Option<XmlDocument>, LookupError> {
        self.transport
            .post_form(
                "books.xml",
                &[
                    ("results", "subjects"),
                    ("index1", "isbn"),
                    ("value1", isbn.as_str()),
                ],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = IsbndbClient::new("test-key").unwrap();
        assert_eq!(client.base_url(), "http://isbndb.com/api");
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = IsbndbClient::with_base_url("key", "http://localhost:9090").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9090");
    }
}
