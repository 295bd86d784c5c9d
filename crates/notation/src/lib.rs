//! # Iconclass Notation
//!
//! In-place, order-preserving editing of Iconclass notation files.
//!
//! ## Format
//!
//! A notation file is a flat sequence of lines grouped into entries:
//!
//! ```text
//! N <code>          starts an entry
//! <payload>*        opaque lines, never inspected
//! R <code>          first cross-reference (optional)
//! ; <code>          further cross-references, ascending
//! $                 ends the entry
//! ```
//!
//! ## Architecture
//!
//! ```text
//! notation file
//!     │
//!     ├──> NotationDocument::load   (line buffer, terminators kept)
//!     │
//!     ├──> insert_reference(from, to)   (repeatable, insertions compound)
//!     │      ├─ entry_index: find `N <from>`
//!     │      └─ plan + apply: keep the R/; block sorted
//!     │
//!     └──> NotationDocument::save   (verbatim)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use iconclass_notation::{InsertionKind, NotationDocument};
//!
//! let mut doc = NotationDocument::parse("N 5\n$\n");
//! let insertion = doc.insert_reference("5", "41").unwrap();
//! assert_eq!(insertion.kind, InsertionKind::FirstReference);
//!
//! doc.insert_reference("5", "30").unwrap();
//! assert_eq!(doc.to_string(), "N 5\nR 30\n; 41\n$\n");
//! ```

mod document;
mod error;
mod insert;
mod line;

pub use document::NotationDocument;
pub use error::{NotationError, Result};
pub use insert::{Insertion, InsertionKind};
pub use line::{classify, line_ending, strip_line_ending, LineKind};
