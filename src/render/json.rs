//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the grouped reference directly, in page order.

use crate::reference::ApiReference;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, reference: &ApiReference) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(reference).context("failed to serialize reference")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Parameter;
    use crate::reference::{OperationEntry, TagSection};
    use serde_json::Value;

    #[test]
    fn serializes_sections_in_order() {
        let reference = ApiReference {
            title: "Docs".to_string(),
            sections: vec![
                TagSection {
                    tag: "a".to_string(),
                    operations: vec![OperationEntry {
                        path: "/a".to_string(),
                        method: "get".to_string(),
                        description: "list a".to_string(),
                        parameters: vec![Parameter {
                            name: "limit".to_string(),
                            location: "query".to_string(),
                            kind: Some("integer".to_string()),
                            description: None,
                        }],
                    }],
                },
                TagSection {
                    tag: "b".to_string(),
                    operations: vec![],
                },
            ],
        };

        let out = JsonRenderer.render(&reference).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "Docs");
        assert_eq!(value["sections"][0]["tag"], "a");
        assert_eq!(value["sections"][1]["tag"], "b");
        let param = &value["sections"][0]["operations"][0]["parameters"][0];
        assert_eq!(param["in"], "query");
        assert_eq!(param["type"], "integer");
        assert!(param.get("description").is_none());
    }
}
