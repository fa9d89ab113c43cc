//! Form-POST transport shared by the Goodreads and ISBNdb clients.
//!
//! Both services take the developer key as an ordinary form field (`key` for
//! Goodreads, `access_key` for ISBNdb) followed by the method parameters,
//! and answer with XML. One request per call, no retries.

use reqwest::StatusCode;

use super::domain::LookupError;
use super::xml::XmlDocument;

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP transport bound to one service and one credential
pub struct FormTransport {
    http_client: reqwest::Client,
    base_url: String,
    key_field: &'static str,
    api_key: String,
}

impl FormTransport {
    /// Build a transport for `base_url`, sending `api_key` as `key_field`.
    pub fn new(
        base_url: impl Into<String>,
        key_field: &'static str,
        api_key: impl Into<String>,
    ) -> Result<Self, LookupError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LookupError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            key_field,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn key_field(&self) -> &str {
        self.key_field
    }

    /// Full URL for a path relative to the service root
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST the key plus `fields` to `path` and parse the XML answer.
    ///
    /// `Ok(None)` means the service answered 404 (nothing by that name).
    /// Any other non-success status, connection failure or malformed body
    /// is an error.
    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<Option<XmlDocument>, LookupError> {
        let url = self.url_for(path);

        let mut form: Vec<(&str, &str)> = Vec::with_capacity(fields.len() + 1);
        form.push((self.key_field, self.api_key.as_str()));
        form.extend_from_slice(fields);

        tracing::debug!(url = %url, params = ?fields, "POST");

        let response = self
            .http_client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(url = %url, "404 - nothing found");
            return Ok(None);
        }

        if !status.is_success() {
            return Err(LookupError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        XmlDocument::parse(&body).map(Some)
    }
}
