//! Hierarchy assembly: dispatch by layout.

pub mod category;
pub mod tree;

use crate::error::Diagnostics;
use crate::model::{Assembled, ParsedRecord};
use clap::ValueEnum;
use serde::Deserialize;

/// How records are arranged into a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Buckets keyed by `@category`, modifiers nested under their parent.
    #[default]
    Category,
    /// Nested tree keyed by the segments of `@id`.
    Tree,
}

/// Arrange records (in discovery order) according to `layout`.
pub fn assemble(layout: Layout, records: Vec<ParsedRecord>, diag: &mut Diagnostics) -> Assembled {
    match layout {
        Layout::Category => Assembled::Categories(category::assemble(records, diag)),
        Layout::Tree => Assembled::Tree(tree::assemble(records, diag)),
    }
}
