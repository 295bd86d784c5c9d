use crate::error::{LexiconError, Result};
use crate::starts_with_digit;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Accepted headers for the Iconclass code column, in lookup order
pub const CODE_COLUMNS: [&str; 2] = ["ICONCLASS", "ICONCLASS CODE"];

/// Accepted headers for the related-scent column, in lookup order
pub const SCENT_COLUMNS: [&str; 2] = [
    "RELATED SCENT",
    "RELATED SCENT (see 'art historical scent wheel in google drive' for categories)",
];

/// One record of a taxonomy sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyRow {
    pub code: String,
    /// Raw comma-separated scent cell, empty when absent
    pub scents: String,
}

impl TaxonomyRow {
    /// Individual scents, trimmed, without empty pieces
    pub fn scent_list(&self) -> impl Iterator<Item = &str> {
        self.scents
            .split(',')
            .map(str::trim)
            .filter(|scent| !scent.is_empty())
    }
}

/// A taxonomy CSV (iconography, objects, spaces, ...) reduced to code and scent cells
#[derive(Debug, Clone)]
pub struct TaxonomySource {
    path: PathBuf,
    rows: Vec<TaxonomyRow>,
}

impl TaxonomySource {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| LexiconError::io(path, err))?;
        let source = Self::from_reader(file, path)?;
        log::info!("Loaded {} taxonomy rows from {}", source.rows.len(), path.display());
        Ok(source)
    }

    /// Parse CSV text; `path` is only used in errors and logs
    pub fn from_reader<R: Read>(reader: R, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|err| LexiconError::csv(&path, err))?
            .clone();
        let find = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| headers.iter().position(|header| header.trim() == *name))
        };
        let code_idx = find(&CODE_COLUMNS[..]).ok_or_else(|| LexiconError::MissingColumn {
            path: path.clone(),
            column: CODE_COLUMNS.join(" | "),
        })?;
        let scent_idx = find(&SCENT_COLUMNS[..]);
        if scent_idx.is_none() {
            log::warn!("{} has no related scent column", path.display());
        }

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|err| LexiconError::csv(&path, err))?;
            let code = record.get(code_idx).unwrap_or_default().trim();
            if code.is_empty() {
                continue;
            }
            let scents = scent_idx
                .and_then(|idx| record.get(idx))
                .unwrap_or_default()
                .trim();
            rows.push(TaxonomyRow {
                code: code.to_string(),
                scents: scents.to_string(),
            });
        }

        Ok(Self { path, rows })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every row with a code, for the cross-reference pass
    #[must_use]
    pub fn rows(&self) -> &[TaxonomyRow] {
        &self.rows
    }

    /// Rows that can carry keywords: a digit-led code and a non-empty scent cell
    pub fn keyword_rows(&self) -> impl Iterator<Item = &TaxonomyRow> {
        self.rows
            .iter()
            .filter(|row| starts_with_digit(&row.code) && !row.scents.is_empty())
    }
}
