//! Markdown renderer for the API reference page.
//!
//! Layout: front matter, a `Packages:` index of tags, then one `## Tag` section
//! per tag with a `#### METHOD /path` block per operation.

use crate::anchor;
use crate::model::Parameter;
use crate::reference::{ApiReference, OperationEntry};
use crate::render::{capitalize, RenderOptions, Renderer};
use anyhow::Result;

/// Line break that survives inside a table cell.
const CELL_BREAK: &str = "<br></br>";

pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, reference: &ApiReference) -> Result<String> {
        let mut output = String::new();

        if self.options.frontmatter {
            output.push_str(&format!("---\ntitle: {}\n---\n\n", reference.title));
        }

        output.push_str("Packages:\n\n");
        for tag in reference.tags() {
            output.push_str(&anchor::render_index_item(tag, self.options.anchors));
            output.push('\n');
        }

        for section in &reference.sections {
            output.push_str(&format!("\n## {}\n", section.tag));
            for op in &section.operations {
                output.push_str(&render_operation(op));
            }
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render one operation block, leading blank line included.
fn render_operation(op: &OperationEntry) -> String {
    let mut out = format!("\n#### {} {}\n", op.method.to_uppercase(), op.path);

    if !op.description.is_empty() {
        out.push('\n');
        out.push_str(&capitalize(&op.description));
        out.push('\n');
    }

    // A list holding only `body` still gets the header rows.
    if !op.parameters.is_empty() {
        out.push_str("\n| Parameter | Description |\n| --- | --- |\n");
        for param in op.parameters.iter().filter(|p| p.name != "body") {
            out.push_str(&render_parameter_row(param));
            out.push('\n');
        }
    }

    out
}

/// `|**name**<br></br>type<br></br>*(in)*| description |`
fn render_parameter_row(param: &Parameter) -> String {
    let description = param
        .description
        .as_deref()
        .unwrap_or_default()
        .replace('\n', CELL_BREAK);
    format!(
        "|**{}**{br}{}{br}*({})*| {} |",
        param.name,
        param.kind.as_deref().unwrap_or_default(),
        param.location,
        description,
        br = CELL_BREAK,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::AnchorStyle;
    use crate::reference::TagSection;

    fn param(name: &str, location: &str, kind: Option<&str>, description: Option<&str>) -> Parameter {
        Parameter {
            name: name.to_string(),
            location: location.to_string(),
            kind: kind.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    fn op(path: &str, method: &str, description: &str, parameters: Vec<Parameter>) -> OperationEntry {
        OperationEntry {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
            parameters,
        }
    }

    fn page(sections: Vec<TagSection>) -> ApiReference {
        ApiReference {
            title: "Test docs".to_string(),
            sections,
        }
    }

    fn render(reference: &ApiReference) -> String {
        MarkdownRenderer::new(RenderOptions {
            anchors: AnchorStyle::Lowercase,
            frontmatter: true,
        })
        .render(reference)
        .unwrap()
    }

    #[test]
    fn full_page_layout() {
        let reference = page(vec![TagSection {
            tag: "things".to_string(),
            operations: vec![op(
                "/apis/example/v1/things",
                "get",
                "list things",
                vec![param("limit", "query", Some("integer"), None)],
            )],
        }]);

        assert_eq!(
            render(&reference),
            "---\ntitle: Test docs\n---\n\n\
             Packages:\n\n\
             - [things](#things)\n\
             \n## things\n\
             \n#### GET /apis/example/v1/things\n\
             \nList things\n\
             \n| Parameter | Description |\n| --- | --- |\n\
             |**limit**<br></br>integer<br></br>*(query)*|  |\n"
        );
    }

    #[test]
    fn no_parameters_no_table() {
        let out = render_operation(&op("/api/", "get", "get available API versions", vec![]));
        assert_eq!(out, "\n#### GET /api/\n\nGet available API versions\n");
        assert!(!out.contains("| Parameter |"));
    }

    #[test]
    fn body_only_renders_empty_table() {
        let out = render_operation(&op(
            "/things",
            "post",
            "create a thing",
            vec![param("body", "body", None, None)],
        ));
        assert!(out.ends_with("| Parameter | Description |\n| --- | --- |\n"), "{out}");
        assert!(!out.contains("**body**"));
    }

    #[test]
    fn body_skipped_among_others() {
        let out = render_operation(&op(
            "/things",
            "post",
            "",
            vec![
                param("body", "body", None, None),
                param("dryRun", "query", Some("string"), Some("dry run")),
            ],
        ));
        assert!(!out.contains("**body**"));
        assert!(out.contains("|**dryRun**<br></br>string<br></br>*(query)*| dry run |"));
    }

    #[test]
    fn empty_description_is_omitted() {
        let out = render_operation(&op("/a", "delete", "", vec![]));
        assert_eq!(out, "\n#### DELETE /a\n");
    }

    #[test]
    fn multiline_parameter_description() {
        let row = render_parameter_row(&param(
            "fieldSelector",
            "query",
            Some("string"),
            Some("A selector.\nDefaults to everything."),
        ));
        assert_eq!(
            row,
            "|**fieldSelector**<br></br>string<br></br>*(query)*| A selector.<br></br>Defaults to everything. |"
        );
    }

    #[test]
    fn missing_type_renders_empty() {
        let row = render_parameter_row(&param("payload", "formData", None, Some("data")));
        assert_eq!(row, "|**payload**<br></br><br></br>*(formData)*| data |");
    }

    #[test]
    fn frontmatter_can_be_disabled() {
        let reference = page(vec![]);
        let out = MarkdownRenderer::new(RenderOptions::default())
            .render(&reference)
            .unwrap();
        assert_eq!(out, "Packages:\n\n");
    }

    #[test]
    fn index_uses_anchor_style() {
        let reference = page(vec![TagSection {
            tag: "Cluster API".to_string(),
            operations: vec![],
        }]);
        assert!(render(&reference).contains("- [Cluster API](#cluster api)\n"));

        let github = MarkdownRenderer::new(RenderOptions {
            anchors: AnchorStyle::Github,
            frontmatter: true,
        })
        .render(&reference)
        .unwrap();
        assert!(github.contains("- [Cluster API](#cluster-api)\n"));
    }
}
