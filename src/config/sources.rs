// src/config/sources.rs
//! Where the catalog reads from.
//!
//! Defaults come from `consts`; a JSON file can replace the page list, point
//! at a schema, and extend the naming tables without a rebuild:
//!
//! ```json
//! {
//!   "pages": [{ "url": "fixtures/intune.html", "resourceType": "intune" }],
//!   "schema": "https://example.invalid/schema.json",
//!   "overrides": { "aadgroup": "AAD Group" },
//!   "extraWords": ["tenant", "allowlist"]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{ Deserialize, Serialize };

use crate::config::consts::{ DEFAULT_DOC_PAGES, DOCS_BASE };
use crate::error::CatalogError;
use crate::naming::{ ManualOverrides, NameResolver, WordDictionary };

/// One documentation page and the resource type it documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocPage {
    pub url: String,
    pub resource_type: String,
}

impl DocPage {
    pub fn new(url: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self { url: url.into(), resource_type: resource_type.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    #[serde(default = "default_pages")]
    pub pages: Vec<DocPage>,
    /// Schema URL or local path. Required for schema mode unless given on the CLI.
    #[serde(default)]
    pub schema: Option<String>,
    /// Merged over the built-in manual overrides (these win).
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
    /// Appended after the built-in dictionary words.
    #[serde(default)]
    pub extra_words: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            pages: default_pages(),
            schema: None,
            overrides: BTreeMap::new(),
            extra_words: Vec::new(),
        }
    }
}

impl SourceConfig {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        serde_json::from_str(&text).map_err(|e| CatalogError::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    /// Built-in naming tables extended with this config's words and overrides.
    pub fn resolver(&self) -> NameResolver {
        NameResolver::new(
            WordDictionary::with_extra(&self.extra_words),
            ManualOverrides::with_extra(&self.overrides),
        )
    }
}

fn default_pages() -> Vec<DocPage> {
    DEFAULT_DOC_PAGES
        .iter()
        .map(|(path, kind)| DocPage::new(join!(DOCS_BASE, path), *kind))
        .collect()
}
