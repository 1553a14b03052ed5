//! Anchor generation for the tag index.

use clap::ValueEnum;

/// How a tag name becomes an in-page anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AnchorStyle {
    /// Lowercase only. Spaces and punctuation are kept as-is, so a tag with a
    /// space yields an anchor with a literal space.
    #[default]
    Lowercase,
    /// GitHub heading slug.
    Github,
}

/// Anchor (without the leading `#`) for `tag`.
pub fn anchor(tag: &str, style: AnchorStyle) -> String {
    match style {
        AnchorStyle::Lowercase => tag.to_lowercase(),
        AnchorStyle::Github => github_slug(tag),
    }
}

/// Index bullet linking to a tag section: `- [Tag](#anchor)`.
pub fn render_index_item(tag: &str, style: AnchorStyle) -> String {
    format!("- [{}](#{})", tag, anchor(tag, style))
}

/// GitHub heading anchor slug.
///
/// - lowercase
/// - drop every char that isn't alphanumeric, space, or hyphen
/// - replace spaces with hyphens
fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
