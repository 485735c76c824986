//! Data model for parsed documentation: format-agnostic.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Value of a single `@name value` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// `@name` with nothing after it.
    Flag,
    Text(String),
}

impl ParamValue {
    /// The value as text; a flag reads as `"true"`.
    pub fn as_str(&self) -> &str {
        match self {
            ParamValue::Flag => "true",
            ParamValue::Text(text) => text,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, ParamValue::Flag)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Flag => serializer.serialize_bool(true),
            ParamValue::Text(text) => serializer.serialize_str(text),
        }
    }
}

pub type Parameters = BTreeMap<String, ParamValue>;

/// Description and parameters of one documentation block, before it is tied
/// to a file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Comment {
    pub description: String,
    pub parameters: Parameters,
}

impl Comment {
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.parameters.is_empty()
    }
}

/// A documentation block attached to the file it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRecord {
    pub description: String,
    pub parameters: Parameters,
    pub markup: Option<String>,
    /// Path of the owning file, relative to the scan root.
    pub source_path: PathBuf,
}

impl ParsedRecord {
    pub fn new(comment: Comment, source_path: impl Into<PathBuf>) -> Self {
        ParsedRecord {
            description: comment.description,
            parameters: comment.parameters,
            markup: None,
            source_path: source_path.into(),
        }
    }

    /// Text value of a parameter, flags included as `"true"`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(ParamValue::as_str)
    }
}

// -- Category layout ----------------------------------------------------------

/// A top-level record of a category together with the records modifying it.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    #[serde(flatten)]
    pub record: ParsedRecord,
    pub modifiers: Vec<ParsedRecord>,
}

impl CategoryEntry {
    pub fn name(&self) -> &str {
        self.record.param("name").unwrap_or("")
    }
}

/// Category name → entries sorted by `@name`.
pub type Categories = BTreeMap<String, Vec<CategoryEntry>>;

// -- Tree layout --------------------------------------------------------------

/// Data attached to the tree node addressed by a record's `@id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub markup: Option<String>,
}

/// One path segment of the documentation tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    pub key: String,
    pub entry: Option<TreeEntry>,
    /// Kept sorted by `key`.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(key: impl Into<String>) -> Self {
        TreeNode {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn child(&self, key: &str) -> Option<&TreeNode> {
        self.children
            .binary_search_by(|c| c.key.as_str().cmp(key))
            .ok()
            .map(|i| &self.children[i])
    }

    /// Follow a `/`-separated path from this node.
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(self, |node, key| node.child(key))
    }
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let entry = self.entry.as_ref();
        let mut s = serializer.serialize_struct("TreeNode", 6)?;
        s.serialize_field("key", &self.key)?;
        s.serialize_field("id", &entry.map(|e| &e.id))?;
        s.serialize_field("title", &entry.and_then(|e| e.title.as_ref()))?;
        s.serialize_field("description", &entry.and_then(|e| e.description.as_ref()))?;
        s.serialize_field("markup", &entry.and_then(|e| e.markup.as_ref()))?;
        s.serialize_field("children", &self.children)?;
        s.end()
    }
}

/// Output of either assembler, ready for a renderer.
#[derive(Debug)]
pub enum Assembled {
    Categories(Categories),
    Tree(TreeNode),
}
