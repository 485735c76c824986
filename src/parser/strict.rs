//! Strict documentation-comment dialect.
//!
//! A strict block opens at the start of a line with `/**` alone on its line,
//! ends with ` */` alone on its line, and prefixes every line in between
//! with ` *` (optionally followed by one space). Anything else is an ordinary
//! comment and is skipped without complaint.

use super::extract::RawBlock;

const FIRST_LINE: &str = "/**";
const LAST_LINE: &str = " */";
const LINE_PREFIX: &str = " *";

/// Cleaned text of a strict block, or `None` if the block does not follow
/// the dialect.
pub fn clean(block: &RawBlock<'_>, source: &str) -> Option<String> {
    if !block.starts_line(source) {
        return None;
    }

    let lines: Vec<&str> = block.text.lines().collect();
    let (first, rest) = lines.split_first()?;
    let (last, interior) = rest.split_last()?;
    if *first != FIRST_LINE || *last != LAST_LINE {
        return None;
    }

    let mut cleaned = Vec::with_capacity(interior.len());
    for line in interior {
        let rest = line.strip_prefix(LINE_PREFIX)?;
        cleaned.push(rest.strip_prefix(' ').unwrap_or(rest).trim_end());
    }
    Some(cleaned.join("\n"))
}
