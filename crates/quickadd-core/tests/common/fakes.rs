//! In-memory collaborators that count their calls

#![allow(dead_code)]

use async_trait::async_trait;
use quickadd_core::sources::{CrossrefAuthor, CrossrefDate, NamedEntry};
use quickadd_core::{
    ArticleLookup, ArticleMetadata, BookLookup, BookMetadata, CitationRecord, CitationStore,
    CreateItemsOutcome, ItemOutcome, LookupError, Pipeline, StoreError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct FakeBooks {
    result: Result<BookMetadata, LookupError>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl FakeBooks {
    pub fn returning(result: Result<BookMetadata, LookupError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookLookup for FakeBooks {
    async fn lookup_by_isbn(&self, isbn: &str) -> Result<BookMetadata, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(isbn.to_string());
        self.result.clone()
    }
}

pub struct FakeArticles {
    result: Result<ArticleMetadata, LookupError>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl FakeArticles {
    pub fn returning(result: Result<ArticleMetadata, LookupError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleLookup for FakeArticles {
    async fn lookup_by_doi(&self, doi: &str) -> Result<ArticleMetadata, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(doi.to_string());
        self.result.clone()
    }
}

/// Store that accepts or rejects everything it is given
pub struct FakeStore {
    accept: bool,
    transport_error: Option<StoreError>,
    calls: AtomicUsize,
    received: Mutex<Vec<CitationRecord>>,
}

impl FakeStore {
    pub fn accepting() -> Arc<Self> {
        Self::build(true, None)
    }

    pub fn rejecting() -> Arc<Self> {
        Self::build(false, None)
    }

    pub fn failing(error: StoreError) -> Arc<Self> {
        Self::build(false, Some(error))
    }

    fn build(accept: bool, transport_error: Option<StoreError>) -> Arc<Self> {
        Arc::new(Self {
            accept,
            transport_error,
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<CitationRecord> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl CitationStore for FakeStore {
    async fn create_items(
        &self,
        records: Vec<CitationRecord>,
    ) -> Result<CreateItemsOutcome, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let count = records.len();
        self.received.lock().unwrap().extend(records);

        if let Some(error) = &self.transport_error {
            return Err(error.clone());
        }

        let items = (0..count)
            .map(|i| {
                if self.accept {
                    ItemOutcome::Created {
                        key: format!("KEY{}", i),
                    }
                } else {
                    ItemOutcome::Failed {
                        reason: "library is read-only".to_string(),
                    }
                }
            })
            .collect();
        Ok(CreateItemsOutcome { items })
    }
}

pub fn pipeline(
    books: &Arc<FakeBooks>,
    articles: &Arc<FakeArticles>,
    store: &Arc<FakeStore>,
) -> Pipeline {
    Pipeline::new(books.clone(), articles.clone(), store.clone())
}

pub fn example_book() -> BookMetadata {
    BookMetadata {
        title: "Example".to_string(),
        subtitle: Some("A Study".to_string()),
        url: Some("https://openlibrary.org/books/OL3952424M/Example".to_string()),
        publish_date: Some("2002".to_string()),
        publishers: Some(vec![NamedEntry::new("Routledge")]),
        publish_places: Some(vec![NamedEntry::new("London")]),
        authors: Some(vec![NamedEntry::new("Jane Q. Doe")]),
        number_of_pages: Some(312),
    }
}

pub fn example_article() -> ArticleMetadata {
    ArticleMetadata {
        title: Some(vec!["An Example Article".to_string()]),
        container_title: Some(vec!["Journal of Examples".to_string()]),
        volume: Some("5".to_string()),
        page: Some("10-20".to_string()),
        published: Some(CrossrefDate {
            date_parts: Some(vec![vec![Some(2019), Some(4), Some(2)]]),
        }),
        doi: Some("10.1000/xyz123".to_string()),
        issn: Some(vec!["1234-5678".to_string()]),
        resource: None,
        author: Some(vec![
            CrossrefAuthor::new("A", "X"),
            CrossrefAuthor::new("B", "Y"),
        ]),
    }
}
