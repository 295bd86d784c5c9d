use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "iconclass-smell.toml";

/// Cross-reference targets of the Odeuropa smell taxonomy
pub const OBJECTS_CODE: &str = "31A3331";
pub const ICONOGRAPHY_CODE: &str = "31A3332";
pub const SPACES_CODE: &str = "31A3333";

/// One taxonomy sheet and the concept every listed code gets a reference to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub path: PathBuf,
    pub category: String,
}

impl SourceConfig {
    fn new(path: &str, category: &str) -> Self {
        Self {
            path: PathBuf::from(path),
            category: category.to_string(),
        }
    }
}

/// Settings for the `integrate` run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntegrationConfig {
    /// Source notation file
    pub notations: PathBuf,

    /// Destination of the edited notation file
    pub output_notations: PathBuf,

    /// Languages whose keyword files are updated
    pub languages: Vec<String>,

    /// Root of `<lang>/*.txt` concept-name tables
    pub txt_dir: PathBuf,

    /// Root of `<lang>/kw_<lang>_*.txt` keyword files
    pub kw_dir: PathBuf,

    /// Where the updated keyword files are written
    pub output_dir: PathBuf,

    /// Taxonomy sheets, processed in order
    pub sources: Vec<SourceConfig>,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            notations: PathBuf::from("notations.txt"),
            output_notations: PathBuf::from("odeuropa_notations.txt"),
            languages: vec!["en".to_string()],
            txt_dir: PathBuf::from("txt"),
            kw_dir: PathBuf::from("kw"),
            output_dir: PathBuf::from("updated_kws"),
            sources: vec![
                SourceConfig::new("odeuropa-taxonomy/iconography.csv", ICONOGRAPHY_CODE),
                SourceConfig::new("odeuropa-taxonomy/objects.csv", OBJECTS_CODE),
                SourceConfig::new("odeuropa-taxonomy/spaces.csv", SPACES_CODE),
            ],
        }
    }
}

impl IntegrationConfig {
    /// Parse a TOML document; omitted fields keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid integration config")
    }

    /// Read a config file; relative paths inside it are taken from the file's directory
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config {}", path.display()))?;
        let mut config = Self::from_toml_str(&text)
            .with_context(|| format!("Cannot parse config {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.resolve_against(base);
        }
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Use `explicit` when given, else [`DEFAULT_CONFIG_FILE`] when present, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::load(fallback)
        } else {
            log::debug!("No {DEFAULT_CONFIG_FILE}; using defaults");
            Ok(Self::default())
        }
    }

    fn resolve_against(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        resolve(&mut self.notations);
        resolve(&mut self.output_notations);
        resolve(&mut self.txt_dir);
        resolve(&mut self.kw_dir);
        resolve(&mut self.output_dir);
        for source in &mut self.sources {
            resolve(&mut source.path);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.languages.is_empty() {
            return Err("languages must not be empty".to_string());
        }
        if let Some(lang) = self.languages.iter().find(|lang| lang.trim().is_empty()) {
            return Err(format!("invalid language {lang:?}"));
        }
        if self.sources.is_empty() {
            return Err("sources must not be empty".to_string());
        }
        if let Some(source) = self
            .sources
            .iter()
            .find(|source| source.category.trim().is_empty())
        {
            return Err(format!(
                "source {} has an empty category",
                source.path.display()
            ));
        }
        Ok(())
    }

    /// Create the keyword output dir and the notation output's parent before anything is written
    pub fn ensure_output_dir(&self) -> Result<()> {
        let notations_dir = self
            .output_notations
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty());
        for dir in std::iter::once(self.output_dir.as_path()).chain(notations_dir) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create output dir {}", dir.display()))?;
        }
        Ok(())
    }
}
