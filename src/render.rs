//! Assembler — render snippets into one JSON snippet-definition document.
//!
//! The document is assembled as literal text, not through a serializer: the
//! downstream snippet consumer expects this exact shape (tab-indented blocks,
//! body lines carrying their own surrounding quotes).

use crate::model::Snippet;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Render the full document: entries joined with `,\n` inside one outer
/// brace pair. No trailing newline.
pub fn document(snippets: &[Snippet], doc_root: &str) -> String {
    let entries: Vec<String> = snippets.iter().map(|s| entry(s, doc_root)).collect();
    format!("{{\n{}\n}}", entries.join(",\n"))
}

/// Render one keyed entry block.
fn entry(snippet: &Snippet, doc_root: &str) -> String {
    let name = &snippet.resource_name;
    let url_line = if snippet.no_url {
        String::new()
    } else {
        format!("\t\t\t\"# {doc_root}/{name}\",\n")
    };
    let body = snippet
        .body
        .iter()
        .map(|line| quote(line))
        .collect::<Vec<_>>()
        .join(",\n\t\t\t");

    format!(
        "\t\"{name}\": {{\n\
         \t\t\"prefix\": \"{name}\",\n\
         \t\t\"body\": [\n\
         {url_line}\
         \t\t\t{body}\n\
         \t\t]\n\
         \t}}"
    )
}

/// Wrap a body line in double quotes, escaping each inner quote whose
/// immediately preceding character is not a backslash.
///
/// Single-pass and shallow on purpose: `\"` is left alone, but a quote after
/// an escaped backslash (`\\"`) is not re-escaped. Good enough for the HCL
/// examples this runs on; a known, accepted limitation.
fn quote(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 2);
    out.push('"');
    let mut prev: Option<char> = None;
    for ch in line.chars() {
        if ch == '"' && prev != Some('\\') {
            out.push('\\');
        }
        out.push(ch);
        prev = Some(ch);
    }
    out.push('"');
    out
}

/// Write the assembled document, creating the output's parent directory if
/// needed. Overwrites any previous file in one go.
pub fn write(output: &Path, text: &str) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(output, text)
        .with_context(|| format!("failed to write {}", output.display()))
}
