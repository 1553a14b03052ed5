//! Tag extraction and per-tag grouping of operations.
//!
//! Turns a decoded [`Document`] into an [`ApiReference`]: tags in lexicographic
//! order, each with its operations sorted by path and then by method priority.

use crate::model::{Document, Operation, Parameter};
use serde::Serialize;
use std::collections::BTreeSet;

/// Methods scanned when collecting tags.
pub const TAGGED_METHODS: &[&str] = &["get", "post", "put", "delete", "patch"];

/// Method order within a single path. Methods not listed sort after these.
const METHOD_PRIORITY: &[&str] = &["get", "put", "post", "delete", "options", "head", "patch"];

/// Sort rank of an HTTP method name (lowercase, as it appears in the document).
pub fn method_rank(method: &str) -> usize {
    METHOD_PRIORITY
        .iter()
        .position(|m| *m == method)
        .unwrap_or(METHOD_PRIORITY.len())
}

/// Everything a renderer needs, in output order.
#[derive(Debug, Serialize)]
pub struct ApiReference {
    pub title: String,
    pub sections: Vec<TagSection>,
}

#[derive(Debug, Serialize)]
pub struct TagSection {
    pub tag: String,
    pub operations: Vec<OperationEntry>,
}

/// One (path, method) pair listed under a tag.
#[derive(Debug, Clone, Serialize)]
pub struct OperationEntry {
    pub path: String,
    pub method: String,
    pub description: String,
    /// Path-level parameters when the path has any, otherwise the operation's own.
    pub parameters: Vec<Parameter>,
}

impl ApiReference {
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.tag.as_str())
    }
}

/// Unique tags carried by operations under the recognized methods.
///
/// A `BTreeSet` keeps them deduplicated and sorted.
pub fn collect_tags(doc: &Document) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    for item in doc.paths.values() {
        for method in TAGGED_METHODS {
            if let Some(op) = item.operations.get(*method) {
                tags.extend(op.tags.iter().cloned());
            }
        }
    }
    tags
}

/// All operations carrying `tag`, sorted by path then method priority.
///
/// Every method key is considered here, not only the recognized five.
pub fn group_operations(doc: &Document, tag: &str) -> Vec<OperationEntry> {
    let mut entries: Vec<OperationEntry> = Vec::new();
    for (path, item) in &doc.paths {
        for (method, op) in &item.operations {
            if !op.has_tag(tag) {
                continue;
            }
            let parameters = if item.parameters.is_empty() {
                op.parameters.clone()
            } else {
                item.parameters.clone()
            };
            entries.push(entry(path, method, op, parameters));
        }
    }
    // Stable: methods outside the priority table keep their map order.
    entries.sort_by(|a, b| {
        a.path
            .cmp(&b.path)
            .then_with(|| method_rank(&a.method).cmp(&method_rank(&b.method)))
    });
    entries
}

fn entry(path: &str, method: &str, op: &Operation, parameters: Vec<Parameter>) -> OperationEntry {
    OperationEntry {
        path: path.to_string(),
        method: method.to_string(),
        description: op.description.clone(),
        parameters,
    }
}

/// Build the full reference: one section per tag, in tag order.
pub fn build(doc: &Document, title: &str) -> ApiReference {
    let sections = collect_tags(doc)
        .into_iter()
        .map(|tag| {
            let operations = group_operations(doc, &tag);
            TagSection { tag, operations }
        })
        .collect();

    ApiReference {
        title: title.to_string(),
        sections,
    }
}
