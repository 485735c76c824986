//! Tree layout: records placed by their `/`-separated `@id`.

use crate::error::{Diagnostics, Warning};
use crate::model::{ParamValue, ParsedRecord, TreeEntry, TreeNode};

pub const ID_PARAM: &str = "id";
pub const TITLE_PARAM: &str = "title";

/// Return the node at `path` below `root`, creating it and any missing
/// ancestors. Children stay sorted by key.
pub fn node_mut<'a>(root: &'a mut TreeNode, path: &[&str]) -> &'a mut TreeNode {
    path.iter().fold(root, |node, key| {
        let idx = match node
            .children
            .binary_search_by(|c| c.key.as_str().cmp(*key))
        {
            Ok(idx) => idx,
            Err(idx) => {
                node.children.insert(idx, TreeNode::new(*key));
                idx
            }
        };
        &mut node.children[idx]
    })
}

/// Build the documentation tree from records in discovery order.
pub fn assemble(records: Vec<ParsedRecord>, diag: &mut Diagnostics) -> TreeNode {
    let mut root = TreeNode::default();

    for record in records {
        let id = match record.parameters.get(ID_PARAM) {
            Some(ParamValue::Text(id)) => id.clone(),
            _ => {
                diag.warn(Warning::MissingId {
                    path: record.source_path,
                });
                continue;
            }
        };
        let segments: Vec<&str> = id.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            diag.warn(Warning::MissingId {
                path: record.source_path,
            });
            continue;
        }

        let node = node_mut(&mut root, &segments);
        if node.entry.is_some() {
            diag.warn(Warning::DuplicateId {
                path: record.source_path.clone(),
                id: id.clone(),
            });
        }
        node.entry = Some(TreeEntry {
            title: record.param(TITLE_PARAM).map(str::to_string),
            description: Some(record.description).filter(|d| !d.is_empty()),
            markup: record.markup,
            id,
        });
    }

    root
}
