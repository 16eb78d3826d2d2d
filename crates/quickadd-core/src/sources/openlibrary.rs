//! Open Library source for ISBN metadata
//!
//! API docs: https://openlibrary.org/dev/docs/api/books
//! One request per lookup, keyed by `ISBN:<isbn>` with `jscmd=data`.

use super::traits::{status_error, BookLookup, LookupError};
use crate::config::{HttpConfig, OpenLibraryConfig};
use crate::http::{HttpClient, HttpError};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

/// Book record as returned by the books API (`jscmd=data`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookMetadata {
    pub title: String,
    pub subtitle: Option<String>,
    pub url: Option<String>,
    pub publish_date: Option<String>,
    pub publishers: Option<Vec<NamedEntry>>,
    pub publish_places: Option<Vec<NamedEntry>>,
    pub authors: Option<Vec<NamedEntry>>,
    pub number_of_pages: Option<u32>,
}

/// An entry carrying a display name (author, publisher, place)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedEntry {
    pub name: String,
    pub url: Option<String>,
}

impl NamedEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

pub struct OpenLibraryClient {
    client: HttpClient,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new(config: &OpenLibraryConfig, http: &HttpConfig) -> Result<Self, HttpError> {
        Ok(Self {
            client: HttpClient::new(http)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Parse a books API response for the given ISBN
    pub fn parse_books_response(json: &str, isbn: &str) -> Result<BookMetadata, LookupError> {
        let mut entries: HashMap<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| LookupError::malformed(format!("Invalid Open Library JSON: {}", e)))?;

        // Unknown ISBNs come back as an empty object
        let entry = entries
            .remove(&bibkey(isbn))
            .ok_or(LookupError::NotFound)?;

        serde_json::from_value(entry)
            .map_err(|e| LookupError::malformed(format!("Unexpected Open Library record: {}", e)))
    }
}

#[async_trait]
impl BookLookup for OpenLibraryClient {
    async fn lookup_by_isbn(&self, isbn: &str) -> Result<BookMetadata, LookupError> {
        let url = format!("{}/api/books", self.base_url);
        let key = bibkey(isbn);
        let params = [
            ("bibkeys", key.as_str()),
            ("jscmd", "data"),
            ("format", "json"),
        ];

        tracing::debug!("Looking up {} on Open Library", key);
        let response = self.client.get_with_params(&url, &params).await?;
        if !response.is_success() {
            return Err(status_error(response.status));
        }

        Self::parse_books_response(&response.body, isbn)
    }
}

fn bibkey(isbn: &str) -> String {
    format!("ISBN:{}", isbn)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "ISBN:9780415263405": {
            "url": "https://openlibrary.org/books/OL3952424M/Example",
            "key": "/books/OL3952424M",
            "title": "Example",
            "subtitle": "A Study",
            "authors": [{"url": "https://openlibrary.org/authors/OL1A", "name": "Jane Q. Doe"}],
            "number_of_pages": 312,
            "publishers": [{"name": "Routledge"}],
            "publish_places": [{"name": "London"}],
            "publish_date": "2002"
        }
    }"#;

    #[test]
    fn test_parse_books_response() {
        let meta = OpenLibraryClient::parse_books_response(SAMPLE_RESPONSE, "9780415263405")
            .unwrap();
        assert_eq!(meta.title, "Example");
        assert_eq!(meta.subtitle.as_deref(), Some("A Study"));
        assert_eq!(meta.publish_date.as_deref(), Some("2002"));
        assert_eq!(meta.authors.unwrap()[0].name, "Jane Q. Doe");
        assert_eq!(meta.publishers.unwrap()[0].name, "Routledge");
    }

    #[test]
    fn test_empty_object_is_not_found() {
        let result = OpenLibraryClient::parse_books_response("{}", "9780415263405");
        assert_eq!(result, Err(LookupError::NotFound));
    }

    #[test]
    fn test_missing_lists_still_decode() {
        let json = r#"{"ISBN:123": {"title": "Bare"}}"#;
        let meta = OpenLibraryClient::parse_books_response(json, "123").unwrap();
        assert!(meta.authors.is_none());
        assert!(meta.publishers.is_none());
    }

    #[test]
    fn test_missing_title_is_malformed() {
        let json = r#"{"ISBN:123": {"subtitle": "No title"}}"#;
        let result = OpenLibraryClient::parse_books_response(json, "123");
        assert!(matches!(result, Err(LookupError::MalformedResponse { .. })));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let json = r#"{"ISBN:123": {"title": "T", "authors": "Jane Doe"}}"#;
        let result = OpenLibraryClient::parse_books_response(json, "123");
        assert!(matches!(result, Err(LookupError::MalformedResponse { .. })));

        let result = OpenLibraryClient::parse_books_response("<html></html>", "123");
        assert!(matches!(result, Err(LookupError::MalformedResponse { .. })));
    }
}
