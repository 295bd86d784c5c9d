use anyhow::Result;
use iconclass_notation::{NotationDocument, NotationError};
use serde::Serialize;
use std::path::PathBuf;

/// Counts for the cross-reference pass
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceTally {
    pub inserted: usize,
    pub skipped: usize,
    /// Codes with no `N <code>` entry, in the order they were requested
    pub missing_entries: Vec<String>,
}

impl ReferenceTally {
    /// Insert one reference and count the outcome; only I/O-class errors are returned.
    pub fn apply(
        &mut self,
        doc: &mut NotationDocument,
        from_code: &str,
        to_code: &str,
    ) -> Result<()> {
        match doc.insert_reference(from_code, to_code) {
            Ok(_) => self.inserted += 1,
            Err(NotationError::EntryNotFound(code)) => {
                self.skipped += 1;
                self.missing_entries.push(code);
            }
            Err(err) if err.is_skippable() => self.skipped += 1,
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }
}

/// Counts for the keyword pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordTally {
    pub added: usize,
    /// Scents dropped because their code has no concept name
    pub skipped: usize,
}

/// JSON document printed on stdout at the end of a run
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    pub keywords_added: usize,
    pub keywords_skipped: usize,
    pub references_inserted: usize,
    pub references_skipped: usize,
    pub missing_entries: Vec<String>,
    pub output_notations: PathBuf,
}

impl RunReport {
    #[must_use]
    pub fn new(
        languages: Vec<String>,
        keywords: KeywordTally,
        references: ReferenceTally,
        output_notations: PathBuf,
    ) -> Self {
        Self {
            status: "ok",
            languages,
            keywords_added: keywords.added,
            keywords_skipped: keywords.skipped,
            references_inserted: references.inserted,
            references_skipped: references.skipped,
            missing_entries: references.missing_entries,
            output_notations,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }
}
