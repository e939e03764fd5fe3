//! kwcat merges per-library libdoc JSON files into one unified,
//! sorted keyword catalog.
//!
//! Each keyword entry is enriched with its detected required arguments
//! and a deep link into the library's published documentation. Sources
//! that cannot be read or parsed are skipped with a warning; the build
//! always emits the best-effort catalog from whatever sources loaded.

mod catalog;
mod classify;
mod model;
mod urls;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "kwcat",
    about = "Merge per-library libdoc JSON files into a unified keyword catalog"
)]
struct Cli {
    /// Input files, directories, or glob patterns. A directory
    /// contributes its immediate *.json children. Defaults to `data`.
    sources: Vec<String>,

    /// Catalog destination
    #[arg(short = 'o', long, default_value = "data/keywords.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let patterns = if cli.sources.is_empty() {
        vec!["data".to_string()]
    } else {
        cli.sources.clone()
    };
    let inputs = expand_sources(&patterns, &cli.output)?;

    let mut entries = Vec::new();
    let mut libraries = 0usize;
    for path in &inputs {
        let lib = match load_library(path) {
            Ok(lib) => lib,
            Err(e) => {
                eprintln!("warning: skipping {}: {:#}", path.display(), e);
                continue;
            }
        };
        let name = library_name(path, &lib);
        entries.extend(catalog::entries_for_library(&name, &lib));
        libraries += 1;
    }

    catalog::sort_entries(&mut entries);

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory: {}", parent.display())
            })?;
        }
    }
    let json = serde_json::to_string_pretty(&entries).context("failed to serialize catalog")?;
    fs::write(&cli.output, json + "\n")
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!(
        "{}: {} keywords from {} libraries",
        cli.output.display(),
        entries.len(),
        libraries
    );
    Ok(())
}

/// Read and parse one libdoc JSON file.
fn load_library(path: &Path) -> Result<model::LibraryDoc> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Library name from the metadata, falling back to the file stem.
/// "data/SeleniumLibrary.json" with no name field → "SeleniumLibrary".
fn library_name(path: &Path, doc: &model::LibraryDoc) -> String {
    match doc.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string(),
    }
}

/// Expand source arguments into a deduplicated, sorted list of JSON
/// files. The output file is never an input, so rebuilding over the
/// same directory does not ingest the previous catalog.
fn expand_sources(patterns: &[String], output: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // A directory contributes its immediate *.json children
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("json") {
                    files.push(p);
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    files.retain(|p| !is_output_file(p, output));
    // Sort for deterministic input order
    files.sort();
    files.dedup();
    Ok(files)
}

/// Best-effort identity check between a discovered input and the
/// output target, which may not exist yet.
fn is_output_file(candidate: &Path, output: &Path) -> bool {
    if candidate == output {
        return true;
    }
    match (candidate.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
