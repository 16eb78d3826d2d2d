//! Common traits for lookup sources

use super::crossref::ArticleMetadata;
use super::openlibrary::BookMetadata;
use crate::http::HttpError;
use async_trait::async_trait;
use thiserror::Error;

/// Why a lookup produced no metadata
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The service answered but has no record for the identifier
    #[error("not found")]
    NotFound,

    /// Transport-level failure or an unusable HTTP status
    #[error("network failure: {message}")]
    NetworkFailure { message: String },

    /// The service answered with something that is not the expected shape
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },
}

impl LookupError {
    pub fn network(message: impl Into<String>) -> Self {
        LookupError::NetworkFailure {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        LookupError::MalformedResponse {
            message: message.into(),
        }
    }
}

impl From<HttpError> for LookupError {
    fn from(e: HttpError) -> Self {
        LookupError::network(e.to_string())
    }
}

/// Map a non-success HTTP status to a lookup error
pub(crate) fn status_error(status: u16) -> LookupError {
    if status == 404 {
        LookupError::NotFound
    } else {
        LookupError::network(format!("HTTP {}", status))
    }
}

/// ISBN → book metadata
#[async_trait]
pub trait BookLookup: Send + Sync {
    async fn lookup_by_isbn(&self, isbn: &str) -> Result<BookMetadata, LookupError>;
}

/// DOI → article metadata
#[async_trait]
pub trait ArticleLookup: Send + Sync {
    async fn lookup_by_doi(&self, doi: &str) -> Result<ArticleMetadata, LookupError>;
}
