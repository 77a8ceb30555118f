//! Document input and output for the ownerline binary.

use anyhow::{Context, Result};
use ownerline_model::PropertyOwners;
use ownerline_parse::OwnerResolver;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How documents are laid out in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// One name line per line; blank lines separate documents.
    Text,
    /// One `{"property_id": .., "name_lines": [..]}` object per line.
    Jsonl,
}

/// The name lines located in one source document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DocumentInput {
    pub property_id: String,
    #[serde(default)]
    pub name_lines: Vec<String>,
}

/// Parses the input into documents.
pub fn read_documents(input: &str, format: InputFormat) -> Result<Vec<DocumentInput>> {
    match format {
        InputFormat::Text => Ok(read_text(input)),
        InputFormat::Jsonl => read_jsonl(input),
    }
}

fn read_text(input: &str) -> Vec<DocumentInput> {
    let mut documents = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in input.lines().map(str::trim) {
        if line.is_empty() {
            flush_text_document(&mut documents, &mut current);
        } else {
            current.push(line.to_string());
        }
    }
    flush_text_document(&mut documents, &mut current);
    documents
}

fn flush_text_document(documents: &mut Vec<DocumentInput>, current: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    documents.push(DocumentInput {
        property_id: format!("doc-{}", documents.len() + 1),
        name_lines: std::mem::take(current),
    });
}

fn read_jsonl(input: &str) -> Result<Vec<DocumentInput>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).with_context(|| format!("invalid document on line {}", idx + 1))
        })
        .collect()
}

/// Resolves every document independently.
pub fn resolve_documents(resolver: &OwnerResolver, documents: Vec<DocumentInput>) -> Vec<PropertyOwners> {
    documents
        .into_iter()
        .map(|doc| {
            let roster = resolver.resolve(&doc.name_lines);
            debug!(
                "Resolved {}: {} owners, {} invalid",
                doc.property_id,
                roster.owners.len(),
                roster.invalid.len()
            );
            PropertyOwners::new(doc.property_id, roster)
        })
        .collect()
}

/// Renders one JSON value per record, newline-separated.
pub fn render(records: &[PropertyOwners], pretty: bool) -> Result<String> {
    let mut out = String::new();
    for record in records {
        let json = if pretty {
            serde_json::to_string_pretty(record)
        } else {
            serde_json::to_string(record)
        }
        .context("Failed to serialize owners")?;
        out.push_str(&json);
        out.push('\n');
    }
    Ok(out)
}
