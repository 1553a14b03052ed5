//! Typed view of a Swagger 2.0 document, limited to what the reference page uses.
//!
//! All shape validation happens here, during decode. Fields the renderer does not
//! need are ignored so newer documents still load.

use crate::error::DocError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Root of a swagger document.
#[derive(Debug, Default, Deserialize)]
pub struct Document {
    /// `swagger` version string, e.g. "2.0".
    #[serde(default, rename = "swagger")]
    pub version: String,
    #[serde(default)]
    pub info: Info,
    /// Path template → operations defined for it.
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,
}

#[derive(Debug, Default, Deserialize)]
#[allow(dead_code)]
pub struct Info {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub license: Option<License>,
}

#[derive(Debug, Default, Deserialize)]
#[allow(dead_code)]
pub struct License {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Operations of one path template, keyed by method name.
///
/// Every key except `parameters` is treated as an operation, so methods beyond
/// the common five (`options`, `head`, ...) are kept. Vendor extension keys
/// (`x-*`) are dropped before decoding and never become operations.
#[derive(Debug, Default, Deserialize)]
pub struct PathItem {
    /// Parameters shared by every operation on this path.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(flatten)]
    pub operations: BTreeMap<String, Operation>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Operation {
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Operation {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    /// Absent for body parameters described by a `schema`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Document {
    /// Read and decode the document at `path`. `-` reads standard input.
    pub fn load(path: &Path) -> Result<Document, DocError> {
        let origin = path.display().to_string();
        let content = if origin == "-" {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| DocError::read("stdin", e))?;
            buf
        } else {
            fs::read(path).map_err(|e| DocError::read(origin.as_str(), e))?
        };
        Document::parse(&content, &origin)
    }

    /// Decode `content`; `origin` names the source in error messages.
    ///
    /// Syntax is checked on the whole input first, so malformed JSON is always
    /// a `Parse` error even when an earlier value already has the wrong shape.
    pub fn parse(content: impl AsRef<[u8]>, origin: &str) -> Result<Document, DocError> {
        let mut value: Value =
            serde_json::from_slice(content.as_ref()).map_err(|e| DocError::parse(origin, e))?;
        strip_path_extensions(&mut value);
        Document::deserialize(value).map_err(|e| DocError::schema(origin, e))
    }
}

/// Remove `x-*` vendor extension keys from every path item.
fn strip_path_extensions(value: &mut Value) {
    let Some(paths) = value.get_mut("paths").and_then(Value::as_object_mut) else {
        return;
    };
    for item in paths.values_mut() {
        if let Some(item) = item.as_object_mut() {
            item.retain(|key, _| !key.starts_with("x-"));
        }
    }
}
