//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;
pub mod markdown;

use crate::anchor::AnchorStyle;
use crate::reference::ApiReference;
use anyhow::{anyhow, Result};

/// Trait for rendering an ApiReference into a specific output format.
pub trait Renderer {
    fn render(&self, reference: &ApiReference) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Options shared by the page renderers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub anchors: AnchorStyle,
    pub frontmatter: bool,
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, options: RenderOptions) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer::new(options))),
        "html" => Ok(Box::new(html::HtmlRenderer::new(options))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown, html, or json",
            format
        )),
    }
}

/// Uppercase the leading character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
