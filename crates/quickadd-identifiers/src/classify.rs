//! Identifier classification for typed input

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// What kind of identifier a piece of user input looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Contains an ISBN-like run of digits
    Book,
    /// Contains a DOI-like `prefix.suffix/` shape
    JournalArticle,
    /// Neither shape was found
    Unrecognized,
}

impl Classification {
    /// Get the display name of the identifier type
    pub fn display_name(&self) -> &'static str {
        match self {
            Classification::Book => "ISBN",
            Classification::JournalArticle => "DOI",
            Classification::Unrecognized => "unrecognised",
        }
    }
}

lazy_static! {
    // Any ten consecutive digits: ISBN-10 or ISBN-13 typed without hyphens
    static ref ISBN_RUN_REGEX: Regex = Regex::new(r"[0-9]{10}").unwrap();

    // DOI shape: 10.1000/xyz, registrant digits then a slash
    static ref DOI_SHAPE_REGEX: Regex = Regex::new(r"[0-9]+\.[0-9]+/").unwrap();
}

/// Classify raw user input as a book, an article, or neither.
///
/// Input is inspected as typed, without trimming. The ISBN check runs first,
/// so a DOI that happens to contain ten consecutive digits is a `Book`.
pub fn classify(raw: &str) -> Classification {
    if ISBN_RUN_REGEX.is_match(raw) {
        Classification::Book
    } else if DOI_SHAPE_REGEX.is_match(raw) {
        Classification::JournalArticle
    } else {
        Classification::Unrecognized
    }
}
