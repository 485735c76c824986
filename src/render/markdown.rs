//! Markdown outline renderer.
//!
//! Descriptions are copied through untouched; markup goes into fenced
//! `html` blocks.

use crate::assemble::category::{CATEGORY_PARAM, NAME_PARAM, PARENT_PARAMS};
use crate::assemble::tree::{ID_PARAM, TITLE_PARAM};
use crate::markup::MARKUP_PARAM;
use crate::model::*;
use crate::render::Renderer;
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer;

/// Parameters already expressed by the document structure.
const STRUCTURAL: &[&str] = &[NAME_PARAM, CATEGORY_PARAM, MARKUP_PARAM, ID_PARAM, TITLE_PARAM];

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Assembled) -> Result<String> {
        Ok(match doc {
            Assembled::Categories(categories) => render_categories(categories),
            Assembled::Tree(root) => render_tree(root),
        })
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

const INDEX_HEADING: &str = "Index";

/// Index and body are built together so anchors follow heading order.
fn render_categories(categories: &Categories) -> String {
    if categories.is_empty() {
        return String::new();
    }

    let mut anchors = toc::Anchors::default();
    anchors.next(INDEX_HEADING);
    let mut index = Vec::new();
    let mut body = Vec::new();

    for (category, entries) in categories {
        index.push(toc::render_toc_item(category, &anchors.next(category), 0));
        body.push(format!("## {}\n", category));
        for entry in entries {
            let title = record_title(&entry.record);
            index.push(toc::render_toc_item(title, &anchors.next(title), 1));
            render_record(&mut body, &entry.record, 3);
            for modifier in &entry.modifiers {
                anchors.next(record_title(modifier));
                render_record(&mut body, modifier, 4);
            }
        }
    }

    with_index(index, body)
}

fn with_index(index: Vec<String>, body: Vec<String>) -> String {
    let mut lines = vec![format!("## {}\n", INDEX_HEADING)];
    lines.extend(index);
    lines.push(String::new());
    lines.extend(body);
    join(lines)
}

fn record_title(record: &ParsedRecord) -> &str {
    record.param(NAME_PARAM).unwrap_or("(unnamed)")
}

fn render_record(lines: &mut Vec<String>, record: &ParsedRecord, level: usize) {
    lines.push(format!("{} {}\n", "#".repeat(level), record_title(record)));

    if !record.description.is_empty() {
        lines.push(record.description.clone());
        lines.push(String::new());
    }

    let extra: Vec<_> = record
        .parameters
        .iter()
        .filter(|(k, _)| !STRUCTURAL.contains(&k.as_str()) && !PARENT_PARAMS.contains(&k.as_str()))
        .collect();
    if !extra.is_empty() {
        for (key, value) in extra {
            match value {
                ParamValue::Flag => lines.push(format!("* `@{}`", key)),
                ParamValue::Text(text) => lines.push(format!("* `@{}` {}", key, text)),
            }
        }
        lines.push(String::new());
    }

    if let Some(ref markup) = record.markup {
        render_markup(lines, markup);
    }
}

fn render_markup(lines: &mut Vec<String>, markup: &str) {
    lines.push("```html".to_string());
    lines.push(markup.trim_end().to_string());
    lines.push("```".to_string());
    lines.push(String::new());
}

fn render_tree(root: &TreeNode) -> String {
    if root.children.is_empty() {
        return String::new();
    }

    let mut anchors = toc::Anchors::default();
    anchors.next(INDEX_HEADING);
    let mut index = Vec::new();
    let mut body = Vec::new();
    for child in &root.children {
        render_node(&mut index, &mut body, &mut anchors, child, 1);
    }
    with_index(index, body)
}

fn node_heading(node: &TreeNode) -> &str {
    node.entry
        .as_ref()
        .and_then(|e| e.title.as_deref())
        .unwrap_or(node.key.as_str())
}

fn render_node(
    index: &mut Vec<String>,
    lines: &mut Vec<String>,
    anchors: &mut toc::Anchors,
    node: &TreeNode,
    depth: usize,
) {
    let heading = node_heading(node);
    index.push(toc::render_toc_item(heading, &anchors.next(heading), depth - 1));

    let level = (depth + 1).min(6);
    lines.push(format!("{} {}\n", "#".repeat(level), heading));

    if let Some(ref entry) = node.entry {
        lines.push(format!("`{}`\n", entry.id));
        if let Some(ref desc) = entry.description {
            lines.push(desc.clone());
            lines.push(String::new());
        }
        if let Some(ref markup) = entry.markup {
            render_markup(lines, markup);
        }
    }

    for child in &node.children {
        render_node(index, lines, anchors, child, depth + 1);
    }
}

fn join(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
