//! Storage collaborator: the reference-management library citations are written to

pub mod zotero;

pub use zotero::*;

use async_trait::async_trait;
use quickadd_domain::CitationRecord;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Request failed: {message}")]
    Http { message: String },
    #[error("Library rejected the request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Unexpected response from library: {message}")]
    MalformedResponse { message: String },
}

impl From<crate::http::HttpError> for StoreError {
    fn from(e: crate::http::HttpError) -> Self {
        StoreError::Http {
            message: e.to_string(),
        }
    }
}

/// Result for one submitted item, in submission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Created { key: String },
    Failed { reason: String },
}

/// Per-item results of a create-items call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateItemsOutcome {
    pub items: Vec<ItemOutcome>,
}

impl CreateItemsOutcome {
    pub fn accepted(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, ItemOutcome::Created { .. }))
            .count()
    }

    /// Reason given for the first rejected item
    pub fn first_failure(&self) -> Option<&str> {
        self.items.iter().find_map(|item| match item {
            ItemOutcome::Failed { reason } => Some(reason.as_str()),
            ItemOutcome::Created { .. } => None,
        })
    }
}

/// A library that can persist citation records
#[async_trait]
pub trait CitationStore: Send + Sync {
    async fn create_items(
        &self,
        records: Vec<CitationRecord>,
    ) -> Result<CreateItemsOutcome, StoreError>;
}
