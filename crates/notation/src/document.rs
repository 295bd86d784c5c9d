use crate::error::{NotationError, Result};
use crate::insert::{self, Insertion};
use crate::line::{classify, LineKind};
use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A notation file held as its raw lines.
///
/// Every line keeps its own terminator, so writing an unedited document
/// reproduces the source byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotationDocument {
    lines: Vec<String>,
}

impl NotationDocument {
    /// Build a document from notation text
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Read a notation file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| NotationError::io(path, err))?;
        let doc = Self::parse(&text);
        log::info!("Loaded {} notation lines from {}", doc.len(), path.display());
        Ok(doc)
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the `N <code>` line that starts the entry for `code`
    #[must_use]
    pub fn entry_index(&self, code: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| classify(line) == LineKind::Entry(code))
    }

    /// Add `to_code` to the references of the entry `from_code`, keeping them sorted.
    ///
    /// A missing entry is logged and reported as [`NotationError::EntryNotFound`];
    /// the buffer is left unchanged in that case, and likewise when the entry
    /// has no `$` terminator. Inserting a code the entry already references adds
    /// a second copy.
    pub fn insert_reference(&mut self, from_code: &str, to_code: &str) -> Result<Insertion> {
        let Some(start) = self.entry_index(from_code) else {
            log::warn!("N {from_code} not found; skipping reference {to_code}");
            return Err(NotationError::entry_not_found(from_code));
        };

        insert::insert_reference(&mut self.lines, start, from_code, to_code).inspect_err(|err| {
            log::warn!("Skipping reference {to_code}: {err}");
        })
    }

    /// Write every line verbatim
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
        }
        writer.flush()
    }

    /// Write the document to `path`, replacing any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = fs::File::create(path).map_err(|err| NotationError::io(path, err))?;
        self.write_to(BufWriter::new(file))
            .map_err(|err| NotationError::io(path, err))?;
        log::info!("Wrote {} notation lines to {}", self.len(), path.display());
        Ok(())
    }
}

impl fmt::Display for NotationDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}
