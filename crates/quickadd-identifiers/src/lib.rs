//! Identifier classification for quickadd
//!
//! Decides whether a line of user input names a book (ISBN-like digit run)
//! or a journal article (DOI-like `prefix.suffix/suffix`).

pub mod classify;

pub use classify::*;
