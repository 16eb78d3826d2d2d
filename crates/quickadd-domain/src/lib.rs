//! Citation domain types shared across the quickadd crates
//!
//! This crate provides the canonical domain models for captured citations:
//! - CitationRecord: A normalized book or journal article citation
//! - Creator: An author with given and family name
//! - Name splitting for free-form personal names

pub mod author;
pub mod citation;

pub use author::*;
pub use citation::*;
