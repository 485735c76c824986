//! GitHub-flavored markdown anchor/slug generation for the index.

use std::collections::HashSet;

/// Generate a table-of-contents link to `anchor`.
pub fn render_toc_link(text: &str, anchor: &str) -> String {
    format!("[{}](#{})", text, anchor)
}

/// Generate a TOC list item, indented two spaces per nesting level.
pub fn render_toc_item(title: &str, anchor: &str, depth: usize) -> String {
    format!("{}* {}", "  ".repeat(depth), render_toc_link(title, anchor))
}

/// Anchors of the headings of one document, handed out in heading order.
///
/// A repeated slug gets `-1`, `-2`, ... appended, as GitHub does.
#[derive(Debug, Default)]
pub struct Anchors {
    used: HashSet<String>,
}

impl Anchors {
    pub fn next(&mut self, heading: &str) -> String {
        let base = github_slug(heading);
        let mut anchor = base.clone();
        let mut n = 0;
        while !self.used.insert(anchor.clone()) {
            n += 1;
            anchor = format!("{}-{}", base, n);
        }
        anchor
    }
}

/// GitHub heading anchor slug generation.
///
/// - lowercase
/// - remove all chars that aren't alphanumeric, space or hyphen
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
