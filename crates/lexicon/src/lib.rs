//! # Iconclass Lexicon
//!
//! The text tables that surround the notation file:
//!
//! - **Concept names** - `code|name` lookup tables, one directory per language
//! - **Keyword buckets** - `code|keyword` files split by the first digit of the code
//! - **Taxonomy sources** - CSV sheets mapping Iconclass codes to related scents
//!
//! ```text
//! taxonomy CSV ──> TaxonomySource::keyword_rows ──┐
//!                                                 ├──> KeywordBuckets::add ──> kws_<lang>_*.txt
//! txt/<lang>/*.txt ──> ConceptNames::name ────────┘
//! ```

mod error;
mod keywords;
mod names;
mod source;

pub use error::{LexiconError, Result};
pub use keywords::{Bucket, KeywordBuckets};
pub use names::ConceptNames;
pub use source::{TaxonomyRow, TaxonomySource, CODE_COLUMNS, SCENT_COLUMNS};

/// Whether `code` starts with an ASCII digit, the one shape every Iconclass code shares.
#[must_use]
pub fn starts_with_digit(code: &str) -> bool {
    code.starts_with(|c: char| c.is_ascii_digit())
}
