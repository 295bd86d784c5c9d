use crate::error::{LexiconError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Display names for concept codes, read from `code|name` text tables
#[derive(Debug, Clone, Default)]
pub struct ConceptNames {
    names: HashMap<String, String>,
}

impl ConceptNames {
    /// Load every `*.txt` table in `dir`.
    ///
    /// Files are read in path order and later files win on duplicate codes.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let pattern = format!(
            "{}/*.txt",
            glob::Pattern::escape(&dir.to_string_lossy())
        );
        let entries = glob::glob(&pattern).map_err(|err| LexiconError::Pattern(err.to_string()))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| {
                let path = err.path().to_path_buf();
                LexiconError::io(path, err.into_error())
            })?;
            paths.push(path);
        }
        paths.sort();

        if paths.is_empty() {
            log::warn!("No name tables found in {}", dir.display());
        }

        let mut names = Self::default();
        for path in &paths {
            let text = fs::read_to_string(path).map_err(|err| LexiconError::io(path, err))?;
            names.extend_from_table(&text);
        }
        log::info!(
            "Loaded {} concept names from {} tables in {}",
            names.len(),
            paths.len(),
            dir.display()
        );
        Ok(names)
    }

    /// Load the tables of one language: `<txt_root>/<lang>/*.txt`
    pub fn for_language(txt_root: impl AsRef<Path>, lang: &str) -> Result<Self> {
        Self::load_dir(txt_root.as_ref().join(lang))
    }

    /// Add the `code|name` rows of one table; rows without exactly one `|` are skipped.
    pub fn extend_from_table(&mut self, text: &str) {
        for line in text.lines() {
            let mut fields = line.split('|');
            let (Some(code), Some(name), None) = (fields.next(), fields.next(), fields.next())
            else {
                log::debug!("Skipping malformed name row {line:?}");
                continue;
            };
            self.names
                .insert(code.to_string(), name.trim_end().to_string());
        }
    }

    #[must_use]
    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows() {
        let mut names = ConceptNames::default();
        names.extend_from_table("11A11|God the Father   \r\nbroken line\n31A3331|smell|extra\n4|Society\n");

        assert_eq!(names.name("11A11"), Some("God the Father"));
        assert_eq!(names.name("4"), Some("Society"));
        assert_eq!(names.name("31A3331"), None);
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_later_rows_override() {
        let mut names = ConceptNames::default();
        names.extend_from_table("5|old\n");
        names.extend_from_table("5|new\n");
        assert_eq!(names.name("5"), Some("new"));
    }
}
