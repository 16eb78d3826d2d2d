//! Lookup sources for fetching metadata from online catalogs

pub mod crossref;
pub mod openlibrary;
pub mod traits;

pub use crossref::*;
pub use openlibrary::*;
pub use traits::*;
