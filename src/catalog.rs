//! Catalog assembly: one entry per keyword, classified and linked.

use crate::classify;
use crate::model::{CatalogEntry, KeywordRecord, LibraryDoc};
use crate::urls;

/// Stand-in text for keywords whose documentation is empty.
const NO_DOC: &str = "No documentation available.";

/// Map every keyword of one library to catalog entries.
pub fn entries_for_library(library: &str, doc: &LibraryDoc) -> Vec<CatalogEntry> {
    doc.keywords
        .iter()
        .map(|keyword| entry_for_keyword(library, keyword))
        .collect()
}

fn entry_for_keyword(library: &str, keyword: &KeywordRecord) -> CatalogEntry {
    let doc = keyword.doc.trim();
    let doc = if doc.is_empty() {
        NO_DOC.to_string()
    } else {
        doc.to_string()
    };

    CatalogEntry {
        name: keyword.name.clone(),
        library: library.to_string(),
        doc,
        args: keyword.args.iter().map(|arg| arg.repr.clone()).collect(),
        required_args: classify::required_args(library, keyword),
        url: urls::doc_url(library, &keyword.name),
    }
}

/// Sort the catalog by library, then case-insensitive keyword name.
/// The sort is stable, so identical inputs always serialize to
/// identical output.
pub fn sort_entries(entries: &mut [CatalogEntry]) {
    entries.sort_by(|a, b| {
        a.library
            .cmp(&b.library)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}
