//! JSON renderer: structured hand-off for external templates.
//!
//! The category layout is an object keyed by category name. The tree layout
//! is the `children` array of the (unnamed) root node.

use crate::model::Assembled;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Assembled) -> Result<String> {
        let mut out = match doc {
            Assembled::Categories(categories) => serde_json::to_string_pretty(categories),
            Assembled::Tree(root) => serde_json::to_string_pretty(&root.children),
        }
        .context("failed to serialize document")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
