use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

/// Default minimum number of identical annotations for an entry to be kept.
pub const DEFAULT_MIN_COUNT: usize = 2;

/// Configuration of a dictionary build, usually loaded from a TOML file.
///
/// ```toml
/// annotated = ["annotated/part1.csv", "annotated/part2.csv.gz"]
/// modifications = "modifications.csv"
/// deletions = "deletions.csv"
/// irregular-verbs = "irregular_verbs.csv"
/// output = "dict.jsonl"
/// min-count = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BuildConfig {
    /// Annotated word lists.
    #[serde(default)]
    pub annotated: Vec<PathBuf>,
    /// Curated replacements and additions.
    pub modifications: Option<PathBuf>,
    /// Curated removals.
    pub deletions: Option<PathBuf>,
    /// Irregular verb forms.
    pub irregular_verbs: Option<PathBuf>,
    /// Where to write records.
    pub output: Option<PathBuf>,
    #[serde(default = "default_min_count")]
    pub min_count: usize,
}

fn default_min_count() -> usize {
    DEFAULT_MIN_COUNT
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            annotated: Vec::new(),
            modifications: None,
            deletions: None,
            irregular_verbs: None,
            output: None,
            min_count: DEFAULT_MIN_COUNT,
        }
    }
}

impl BuildConfig {
    /// Load configuration from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).with_context(|| anyhow!("{}", path.display()))?;
        let config = toml::from_str(&data).with_context(|| anyhow!("{}", path.display()))?;
        Ok(config)
    }

    /// Parse configuration from a string.
    pub fn parse(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }
}

/// Get a required path out of a configuration field.
pub(crate) fn required<'a>(path: &'a Option<PathBuf>, name: &str) -> Result<&'a Path> {
    path.as_deref()
        .with_context(|| anyhow!("Missing required input `{name}`"))
}
