//! Data model: libdoc input records and merged catalog entries.

use serde::{Deserialize, Serialize};

/// One formal parameter of a keyword, as declared by libdoc.
#[derive(Debug, Clone, Deserialize)]
pub struct ArgumentSpec {
    #[serde(default)]
    pub name: String,
    /// Textual declaration form, e.g. `timeout=30` or `*varargs`.
    #[serde(default)]
    pub repr: String,
}

/// One documented keyword.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub args: Vec<ArgumentSpec>,
}

/// Per-library metadata document as produced by libdoc.
#[derive(Debug, Deserialize)]
pub struct LibraryDoc {
    /// Library name. Falls back to the source file stem when absent.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub keywords: Vec<KeywordRecord>,
}

/// One entry of the merged keyword catalog.
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub library: String,
    pub doc: String,
    /// Raw argument declarations in source order.
    pub args: Vec<String>,
    #[serde(rename = "requiredArgs")]
    pub required_args: Vec<String>,
    /// Deep link into the library's published documentation.
    /// Empty when the library has no known documentation page.
    pub url: String,
}
