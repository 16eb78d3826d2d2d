//! Error types for quickadd-core

use crate::normalize::NormalizationError;
use crate::pipeline::PipelineStage;
use crate::sources::LookupError;
use crate::store::StoreError;
use quickadd_identifiers::Classification;
use thiserror::Error;

/// Result type alias for pipeline runs
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Why a submission did not end up in the library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Input is neither ISBN-like nor DOI-like
    #[error("Type not recognised")]
    ClassificationMiss,

    /// The metadata service could not supply a record
    #[error("{}", lookup_message(.kind, .identifier, .source))]
    Lookup {
        kind: Classification,
        identifier: String,
        source: LookupError,
    },

    /// The metadata lacked a field a citation needs
    #[error("Incomplete metadata, {0}")]
    Normalization(#[from] NormalizationError),

    /// The library accepted none of the submitted items
    #[error("Failed to add {}", rejected_message(.title, .reason))]
    PersistenceRejected {
        title: String,
        reason: Option<String>,
    },

    /// The library could not be reached or refused the request
    #[error("Failed to add {title}: {source}")]
    Persistence { title: String, source: StoreError },
}

impl PipelineError {
    /// Stage the run was in when it failed
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::ClassificationMiss => PipelineStage::Classifying,
            PipelineError::Lookup { .. } => PipelineStage::Fetching,
            PipelineError::Normalization(_) => PipelineStage::Normalizing,
            PipelineError::PersistenceRejected { .. } | PipelineError::Persistence { .. } => {
                PipelineStage::Persisting
            }
        }
    }
}

fn lookup_message(kind: &Classification, identifier: &str, source: &LookupError) -> String {
    match source {
        LookupError::NotFound => format!("{} {} not found", kind.display_name(), identifier),
        other => format!("{} lookup failed: {}", kind.display_name(), other),
    }
}

fn rejected_message(title: &str, reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!("{}: {}", title, reason),
        None => title.to_string(),
    }
}
