//! Submission pipeline: classify → look up → normalize → persist → report
//!
//! One submission is one sequential run. The pipeline holds no state between
//! runs; every run builds a fresh record and hands it to the store once.

use crate::config::QuickaddConfig;
use crate::error::{PipelineError, Result};
use crate::http::HttpError;
use crate::normalize::{from_article_metadata, from_book_metadata};
use crate::sources::{ArticleLookup, BookLookup, CrossrefClient, LookupError, OpenLibraryClient};
use crate::store::{CitationStore, ItemOutcome, ZoteroStore};
use chrono::Local;
use quickadd_domain::CitationRecord;
use quickadd_identifiers::{classify, Classification};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Where a run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineStage {
    Idle,
    Classifying,
    Fetching,
    Normalizing,
    Persisting,
    Reporting,
}

/// Severity of a report shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    Success,
    Warning,
}

/// Outcome of one submission as surfaced to the user interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub ok: bool,
    pub level: ReportLevel,
    pub message: String,
}

impl Report {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            level: ReportLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            level: ReportLevel::Warning,
            message: message.into(),
        }
    }
}

impl From<&PipelineError> for Report {
    fn from(error: &PipelineError) -> Self {
        Report::warning(error.to_string())
    }
}

/// A citation the library accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    pub title: String,
    pub key: Option<String>,
}

impl From<&Added> for Report {
    fn from(added: &Added) -> Self {
        Report::success(format!("Successfully added {}", added.title))
    }
}

pub struct Pipeline {
    books: Arc<dyn BookLookup>,
    articles: Arc<dyn ArticleLookup>,
    store: Arc<dyn CitationStore>,
}

impl Pipeline {
    pub fn new(
        books: Arc<dyn BookLookup>,
        articles: Arc<dyn ArticleLookup>,
        store: Arc<dyn CitationStore>,
    ) -> Self {
        Self {
            books,
            articles,
            store,
        }
    }

    /// Build the pipeline with the Open Library, Crossref and Zotero clients
    pub fn from_config(config: &QuickaddConfig) -> std::result::Result<Self, HttpError> {
        Ok(Self::new(
            Arc::new(OpenLibraryClient::new(&config.open_library, &config.http)?),
            Arc::new(CrossrefClient::new(&config.crossref, &config.http)?),
            Arc::new(ZoteroStore::new(&config.zotero, &config.http)?),
        ))
    }

    /// Handle one line of user input.
    ///
    /// Returns `None` for blank input: nothing was submitted, so there is
    /// nothing to report. Every other input yields exactly one report.
    pub async fn handle_submission(&self, text: &str) -> Option<Report> {
        if text.trim().is_empty() {
            tracing::debug!("Ignoring empty submission");
            return None;
        }

        let report = match self.run(text).await {
            Ok(added) => {
                tracing::info!("Added {}", added.title);
                Report::from(&added)
            }
            Err(e) => {
                tracing::warn!("Submission failed during {:?}: {}", e.stage(), e);
                Report::from(&e)
            }
        };
        tracing::debug!("{:?} -> {:?}", PipelineStage::Reporting, PipelineStage::Idle);
        Some(report)
    }

    /// Run classification, lookup, normalization and persistence for `text`
    pub async fn run(&self, text: &str) -> Result<Added> {
        enter(PipelineStage::Classifying);
        let kind = classify(text);
        let identifier = text.trim();

        let record = match kind {
            Classification::Unrecognized => return Err(PipelineError::ClassificationMiss),
            Classification::Book => {
                enter(PipelineStage::Fetching);
                let meta = self
                    .books
                    .lookup_by_isbn(identifier)
                    .await
                    .map_err(|source| lookup_error(kind, identifier, source))?;
                enter(PipelineStage::Normalizing);
                from_book_metadata(meta, identifier)?
            }
            Classification::JournalArticle => {
                enter(PipelineStage::Fetching);
                let meta = self
                    .articles
                    .lookup_by_doi(identifier)
                    .await
                    .map_err(|source| lookup_error(kind, identifier, source))?;
                enter(PipelineStage::Normalizing);
                from_article_metadata(meta)?
            }
        };

        let record = record.stamp_accessed(Local::now());
        self.persist(record).await
    }

    async fn persist(&self, record: CitationRecord) -> Result<Added> {
        enter(PipelineStage::Persisting);
        let title = record.title().to_string();

        let outcome = self
            .store
            .create_items(vec![record])
            .await
            .map_err(|source| PipelineError::Persistence {
                title: title.clone(),
                source,
            })?;

        if outcome.accepted() == 0 {
            return Err(PipelineError::PersistenceRejected {
                reason: outcome.first_failure().map(str::to_string),
                title,
            });
        }

        let key = outcome.items.iter().find_map(|item| match item {
            ItemOutcome::Created { key } => Some(key.clone()),
            ItemOutcome::Failed { .. } => None,
        });
        Ok(Added { title, key })
    }
}

fn enter(stage: PipelineStage) {
    tracing::debug!("Pipeline stage: {:?}", stage);
}

fn lookup_error(
    kind: Classification,
    identifier: &str,
    source: LookupError,
) -> PipelineError {
    PipelineError::Lookup {
        kind,
        identifier: identifier.to_string(),
        source,
    }
}
