//! Citation record domain model

use super::Creator;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Kind of item a citation describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Book,
    JournalArticle,
}

/// The canonical citation shape handed to a reference-management library.
///
/// Built once from a single lookup response. The kind is fixed at
/// construction; fields are only reachable through accessors, and the
/// builder methods consume the record, so nothing can change it after
/// [`CitationRecord::stamp_accessed`] has been applied by its owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationRecord {
    kind: ItemKind,
    title: String,
    short_title: Option<String>,
    publication_venue: Option<String>,
    volume: Option<String>,
    pages: Option<String>,
    date: Option<String>,
    url: Option<String>,
    isbn: Option<String>,
    doi: Option<String>,
    issn: Option<String>,
    place: Option<String>,
    creators: Vec<Creator>,
    accessed_at: Option<DateTime<Local>>,
}

impl CitationRecord {
    /// Create a record with its required fields
    pub fn new(kind: ItemKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            short_title: None,
            publication_venue: None,
            volume: None,
            pages: None,
            date: None,
            url: None,
            isbn: None,
            doi: None,
            issn: None,
            place: None,
            creators: Vec::new(),
            accessed_at: None,
        }
    }

    pub fn with_short_title(mut self, short_title: impl Into<String>) -> Self {
        self.short_title = Some(short_title.into());
        self
    }

    /// Journal name for articles, publisher name for books
    pub fn with_publication_venue(mut self, venue: impl Into<String>) -> Self {
        self.publication_venue = Some(venue.into());
        self
    }

    pub fn with_volume(mut self, volume: Option<String>) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_pages(mut self, pages: Option<String>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    pub fn with_isbn(mut self, isbn: Option<String>) -> Self {
        self.isbn = isbn;
        self
    }

    pub fn with_doi(mut self, doi: Option<String>) -> Self {
        self.doi = doi;
        self
    }

    pub fn with_issn(mut self, issn: Option<String>) -> Self {
        self.issn = issn;
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Set the creators; order is author order and is kept as given
    pub fn with_creators(mut self, creators: Vec<Creator>) -> Self {
        self.creators = creators;
        self
    }

    /// Record when the citation was captured
    pub fn stamp_accessed(mut self, at: DateTime<Local>) -> Self {
        self.accessed_at = Some(at);
        self
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn short_title(&self) -> Option<&str> {
        self.short_title.as_deref()
    }

    pub fn publication_venue(&self) -> Option<&str> {
        self.publication_venue.as_deref()
    }

    pub fn volume(&self) -> Option<&str> {
        self.volume.as_deref()
    }

    pub fn pages(&self) -> Option<&str> {
        self.pages.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref()
    }

    pub fn doi(&self) -> Option<&str> {
        self.doi.as_deref()
    }

    pub fn issn(&self) -> Option<&str> {
        self.issn.as_deref()
    }

    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    pub fn creators(&self) -> &[Creator] {
        &self.creators
    }

    pub fn accessed_at(&self) -> Option<DateTime<Local>> {
        self.accessed_at
    }
}
