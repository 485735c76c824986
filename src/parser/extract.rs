//! Lexical extraction of `/** ... */` blocks from a source file.
//!
//! Purely textual: a `*/` inside a string literal of the host language still
//! closes the block.

use std::path::Path;

pub const OPEN: &str = "/**";
pub const CLOSE: &str = "*/";

/// A documentation comment as it appears in the file, decoration included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub path: &'a Path,
    pub text: &'a str,
    /// Byte offset of the opening delimiter.
    pub offset: usize,
}

impl RawBlock<'_> {
    /// Whether the opening delimiter is the first thing on its line.
    pub fn starts_line(&self, source: &str) -> bool {
        self.offset == 0 || source[..self.offset].ends_with('\n')
    }
}

/// Iterator over the blocks of one file. Cloning it restarts from the
/// clone point.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    path: &'a Path,
    source: &'a str,
    pos: usize,
}

/// Lazily find every documentation block in `source`.
pub fn blocks<'a>(path: &'a Path, source: &'a str) -> Blocks<'a> {
    Blocks {
        path,
        source,
        pos: 0,
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = RawBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.source.get(self.pos..)?;
        let start = self.pos + rest.find(OPEN)?;
        let body = start + OPEN.len();
        let Some(close) = self.source[body..].find(CLOSE) else {
            // Unterminated: nothing after this point can close either.
            self.pos = self.source.len();
            return None;
        };
        let end = body + close + CLOSE.len();
        self.pos = end;
        Some(RawBlock {
            path: self.path,
            text: &self.source[start..end],
            offset: start,
        })
    }
}
