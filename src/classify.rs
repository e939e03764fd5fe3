//! Required-argument detection.
//!
//! Phase 1 reads the structural argument list shipped in libdoc
//! metadata: an argument is required when it carries no default value
//! and is not a variadic collector. This is authoritative for every
//! library.
//!
//! Phase 2 is a bounded fallback for libraries whose libdoc output
//! omits argument lists. Their documentation generator wraps genuinely
//! required parameter names in inline-code markup, so when Phase 1
//! comes back empty we recover names from `<code>` spans in the
//! keyword prose instead. Recovered names are never checked against a
//! structural list and may over- or under-report.

use crate::model::KeywordRecord;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Libraries whose libdoc output is too sparse for structural
/// detection. An empty Phase 1 result for these triggers the doc-text
/// fallback. Opting in a new source is a one-line edit here.
const DOC_FALLBACK_LIBRARIES: &[&str] = &["RequestsLibrary"];

/// Names common in inline-code markup that are optional keyword-call
/// parameters, boolean literals, or catch-all sentinels. Matched
/// case-insensitively.
const OPTIONAL_DOC_ARGS: &[&str] = &[
    "params",
    "data",
    "json",
    "headers",
    "cookies",
    "files",
    "auth",
    "timeout",
    "allow_redirects",
    "proxies",
    "verify",
    "cert",
    "expected_status",
    "msg",
    "any",
    "anything",
    "session",
    "name",
    "value",
    "attributes",
    "kwargs",
    "ALL",
    "NONE",
    "TRUE",
    "FALSE",
];

/// HTTP verbs show up in request examples, never as parameter names.
const HTTP_VERBS: &[&str] = &["get", "post", "put", "delete", "patch", "head"];

static RE_INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<code>([a-zA-Z_][a-zA-Z0-9_]*)</code>").unwrap());

/// Whether a library is opted into the Phase 2 doc-text fallback.
pub fn uses_doc_fallback(library: &str) -> bool {
    DOC_FALLBACK_LIBRARIES.contains(&library)
}

/// Detect the required arguments of a keyword.
///
/// Structural detection wins whenever it yields anything; the doc-text
/// fallback only runs for opted-in libraries whose metadata gave us
/// nothing to work with. A keyword with no arguments and no matching
/// markup legitimately yields an empty list.
pub fn required_args(library: &str, keyword: &KeywordRecord) -> Vec<String> {
    let required = structural_required(keyword);
    if required.is_empty() && uses_doc_fallback(library) && keyword.doc.contains("<code>") {
        return doc_required(&keyword.doc);
    }
    required
}

/// Phase 1: an argument is required iff its repr has no default value
/// (`=`) and no variadic marker (a `*` prefix covers both `*varargs`
/// and `**kwargs`).
fn structural_required(keyword: &KeywordRecord) -> Vec<String> {
    let names = keyword
        .args
        .iter()
        .filter(|arg| !arg.repr.contains('=') && !arg.repr.starts_with('*'))
        .map(|arg| arg.name.clone())
        .collect();
    dedup_keep_order(names)
}

/// Phase 2: recover parameter names from `<code>` spans in the prose,
/// minus known-optional names and HTTP verbs.
fn doc_required(doc: &str) -> Vec<String> {
    let names = RE_INLINE_CODE
        .captures_iter(doc)
        .map(|cap| cap[1].to_string())
        .filter(|name| !is_denylisted(name))
        .collect();
    dedup_keep_order(names)
}

fn is_denylisted(name: &str) -> bool {
    OPTIONAL_DOC_ARGS
        .iter()
        .chain(HTTP_VERBS.iter())
        .any(|token| token.eq_ignore_ascii_case(name))
}

/// Drop duplicate names, keeping the first occurrence of each.
fn dedup_keep_order(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
