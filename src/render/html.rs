//! HTML renderer — standalone HTML page with the same structure as the Markdown one.

use crate::anchor;
use crate::model::Parameter;
use crate::reference::{ApiReference, OperationEntry};
use crate::render::{capitalize, RenderOptions, Renderer};
use anyhow::Result;

pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, reference: &ApiReference) -> Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", html_escape(&reference.title)));
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 60em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("table { border-collapse: collapse; }\n");
        out.push_str("th, td { border: 1px solid #ddd; padding: 0.3em 0.6em; text-align: left; vertical-align: top; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        if self.options.frontmatter {
            out.push_str(&format!("<h1>{}</h1>\n", html_escape(&reference.title)));
        }

        // Index
        out.push_str("<p>Packages:</p>\n<ul>\n");
        for tag in reference.tags() {
            out.push_str(&format!(
                "  <li><a href=\"#{}\">{}</a></li>\n",
                html_escape(&anchor::anchor(tag, self.options.anchors)),
                html_escape(tag)
            ));
        }
        out.push_str("</ul>\n");

        for section in &reference.sections {
            out.push_str(&format!(
                "<h2 id=\"{}\">{}</h2>\n",
                html_escape(&anchor::anchor(&section.tag, self.options.anchors)),
                html_escape(&section.tag)
            ));
            for op in &section.operations {
                out.push_str(&render_operation_html(op));
            }
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_operation_html(op: &OperationEntry) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<h4><code>{}</code> {}</h4>\n",
        op.method.to_uppercase(),
        html_escape(&op.path)
    ));

    if !op.description.is_empty() {
        out.push_str(&format!(
            "<p>{}</p>\n",
            html_escape(&capitalize(&op.description))
        ));
    }

    if !op.parameters.is_empty() {
        out.push_str("<table>\n<tr><th>Parameter</th><th>Description</th></tr>\n");
        for param in op.parameters.iter().filter(|p| p.name != "body") {
            out.push_str(&render_parameter_html(param));
        }
        out.push_str("</table>\n");
    }

    out
}

fn render_parameter_html(param: &Parameter) -> String {
    let description = html_escape(param.description.as_deref().unwrap_or_default())
        .replace('\n', "<br>");
    format!(
        "<tr><td><strong>{}</strong><br>{}<br><em>({})</em></td><td>{}</td></tr>\n",
        html_escape(&param.name),
        html_escape(param.kind.as_deref().unwrap_or_default()),
        html_escape(&param.location),
        description
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
