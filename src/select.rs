//! Selector — pick cached documentation files worth processing.
//!
//! The cache directory holds one page per provider resource; only files whose
//! name contains one of the configured service fragments are kept.

use anyhow::{bail, Context, Result};
use regex::RegexBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// List cache entries whose file name matches the allow-list.
///
/// Fails if the cache directory is missing — the fetch step has to run first,
/// and nothing else should happen in that case.
pub fn cached_documents(cache_dir: &Path, services: &[String]) -> Result<Vec<PathBuf>> {
    if !cache_dir.is_dir() {
        bail!(
            "cache directory {} not found; run the fetch step before generating snippets",
            cache_dir.display()
        );
    }

    let filter = service_filter(services)?;

    let entries = fs::read_dir(cache_dir)
        .with_context(|| format!("failed to read directory: {}", cache_dir.display()))?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        if filter.is_match(&name.to_string_lossy()) {
            files.push(path);
        }
    }

    // Sort for deterministic output
    files.sort();
    Ok(files)
}

/// Compile the allow-list into one case-insensitive alternation.
/// A fragment matches anywhere in the file name.
fn service_filter(services: &[String]) -> Result<regex::Regex> {
    let alternation = services
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&format!("({alternation})"))
        .case_insensitive(true)
        .build()
        .context("failed to compile service filter")
}
