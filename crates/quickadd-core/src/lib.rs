//! quickadd-core: capture a citation from an ISBN or DOI
//!
//! This library provides:
//! - Lookup clients for Open Library (ISBN) and Crossref (DOI)
//! - Normalization of both response shapes into one citation record
//! - A Zotero web library store for persisting records
//! - The submission pipeline tying these together
//!
//! The pipeline is driven by a user interface that hands it one line of
//! text and renders the returned [`Report`].

pub mod config;
pub mod error;
pub mod http;
pub mod normalize;
pub mod pipeline;
pub mod sources;
pub mod store;

// Re-export main types for convenience
pub use config::{ConfigError, QuickaddConfig};
pub use error::PipelineError;
pub use normalize::{from_article_metadata, from_book_metadata, NormalizationError};
pub use pipeline::{Added, Pipeline, PipelineStage, Report, ReportLevel};
pub use quickadd_domain::{CitationRecord, Creator, CreatorRole, ItemKind};
pub use quickadd_identifiers::{classify, Classification};
pub use sources::{
    ArticleLookup, ArticleMetadata, BookLookup, BookMetadata, CrossrefClient, LookupError,
    OpenLibraryClient,
};
pub use store::{CitationStore, CreateItemsOutcome, ItemOutcome, StoreError, ZoteroStore};
