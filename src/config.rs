//! Linter configuration: document format markers and the header schema.
//!
//! All knobs the original tooling kept implicit are explicit here, so a
//! caller always states which rules root, markers, and required keys a run
//! uses. Every field has a default; a config file may set any subset.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Line that opens and closes the header block.
    pub delimiter: String,
    /// Marker that introduces a reference token in the body.
    pub sigil: String,
    /// File extension (without dot) of rule documents.
    pub extension: String,
    /// Header keys every document must carry with a non-empty value.
    pub required_keys: Vec<String>,
    /// Header key holding the document's human-readable description.
    pub description_key: String,
    /// Header key holding the file patterns a rule applies to.
    pub pattern_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: "---".to_string(),
            sigil: "@".to_string(),
            extension: "mdc".to_string(),
            required_keys: vec!["description".to_string(), "globs".to_string()],
            description_key: "description".to_string(),
            pattern_key: "globs".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
