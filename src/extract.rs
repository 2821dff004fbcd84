//! Extractor — pull the example code block out of one cached page.
//!
//! Each documentation page carries an "Example Usage" section whose first
//! fenced code block declares the resource. The block we want starts with
//! `resource "<prefix>_<name>"` where `<name>` comes from the file name.

use crate::model::Snippet;
use anyhow::{Context, Result};
use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use std::fs;
use std::path::Path;

/// Process one selected file. `Ok(None)` means the page had no matching
/// example block — a normal outcome, many pages only show data sources or
/// use a different header format.
pub fn snippet(path: &Path, provider_prefix: &str) -> Result<Option<Snippet>> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = resource_name(&file_name);

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    println!("processing: {name}");

    let header = format!("resource \"{provider_prefix}_{name}\"");
    let block = code_blocks(&content)
        .into_iter()
        .find(|code| code.starts_with(&header));

    Ok(block.map(|code| {
        Snippet::new(name, code.lines().map(str::to_string).collect())
    }))
}

/// File names look like `instance.html.markdown`; the resource type is
/// everything before the first dot.
fn resource_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Fenced code block texts in document order, trailing newline stripped.
fn code_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Option<String> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(_))) => {
                current = Some(String::new());
            }
            Event::Text(text) => {
                if let Some(buf) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(mut code) = current.take() {
                    if code.ends_with('\n') {
                        code.pop();
                    }
                    blocks.push(code);
                }
            }
            _ => {}
        }
    }

    blocks
}
