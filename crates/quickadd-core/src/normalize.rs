//! Mapping of lookup responses into citation records
//!
//! One pure function per source. A record is only built once every required
//! field has been found; otherwise the missing field is reported.

use crate::sources::{ArticleMetadata, BookMetadata, CrossrefAuthor, NamedEntry};
use quickadd_domain::{CitationRecord, Creator, ItemKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
}

/// Build a book citation from Open Library metadata.
///
/// `isbn` is the identifier the lookup was keyed by.
pub fn from_book_metadata(
    meta: BookMetadata,
    isbn: &str,
) -> Result<CitationRecord, NormalizationError> {
    let short_title = non_blank(Some(meta.title)).ok_or(NormalizationError::MissingField("title"))?;
    let authors = non_empty(meta.authors, "authors")?;
    let publisher = first_name(meta.publishers, "publishers")?;
    let place = first_name(meta.publish_places, "publish_places")?;

    let title = match non_blank(meta.subtitle) {
        Some(subtitle) => format!("{}: {}", short_title, subtitle),
        None => short_title.clone(),
    };

    let creators = authors
        .iter()
        .map(|author| Creator::author_from_name(&author.name))
        .collect();

    Ok(CitationRecord::new(ItemKind::Book, title)
        .with_short_title(short_title)
        .with_publication_venue(publisher)
        .with_place(place)
        .with_date(non_blank(meta.publish_date))
        .with_url(non_blank(meta.url))
        .with_isbn(Some(isbn.to_string()))
        .with_creators(creators))
}

/// Build a journal-article citation from Crossref metadata.
///
/// Crossref already segments author names, so no name splitting happens here.
pub fn from_article_metadata(meta: ArticleMetadata) -> Result<CitationRecord, NormalizationError> {
    let primary_url = meta.primary_url().map(str::to_string);
    let title = first(meta.title, "title")?;
    let venue = first(meta.container_title, "container-title")?;
    let authors = non_empty(meta.author, "author")?;
    let year = meta
        .published
        .as_ref()
        .and_then(|published| published.year())
        .ok_or(NormalizationError::MissingField("published.date-parts"))?;

    let creators = authors
        .into_iter()
        .map(article_creator)
        .collect::<Result<Vec<_>, _>>()?;
    let issn = meta.issn.and_then(|issns| issns.into_iter().next());

    Ok(CitationRecord::new(ItemKind::JournalArticle, title)
        .with_publication_venue(venue)
        .with_volume(non_blank(meta.volume))
        .with_pages(non_blank(meta.page))
        .with_date(Some(year.to_string()))
        .with_doi(non_blank(meta.doi))
        .with_issn(non_blank(issn))
        .with_url(primary_url)
        .with_creators(creators))
}

/// Entries with no usable name at all are rejected
fn article_creator(author: CrossrefAuthor) -> Result<Creator, NormalizationError> {
    let given = non_blank(author.given);
    match (given, non_blank(author.family), non_blank(author.name)) {
        (given, Some(family), _) | (given, None, Some(family)) => {
            Ok(Creator::author(given.unwrap_or_default(), family))
        }
        (Some(given), None, None) => Ok(Creator::author(given, "")),
        (None, None, None) => Err(NormalizationError::MissingField("author")),
    }
}

fn non_empty<T>(list: Option<Vec<T>>, field: &'static str) -> Result<Vec<T>, NormalizationError> {
    match list {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(NormalizationError::MissingField(field)),
    }
}

fn first(list: Option<Vec<String>>, field: &'static str) -> Result<String, NormalizationError> {
    non_empty(list, field)?
        .into_iter()
        .next()
        .and_then(|value| non_blank(Some(value)))
        .ok_or(NormalizationError::MissingField(field))
}

fn first_name(
    list: Option<Vec<NamedEntry>>,
    field: &'static str,
) -> Result<String, NormalizationError> {
    let names = non_empty(list, field)?
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    first(Some(names), field)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
