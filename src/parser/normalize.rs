//! Strip comment decoration from a raw block.

use super::extract::{CLOSE, OPEN};

/// Remove delimiters and leading asterisks, one line at a time.
///
/// Handles one-line blocks (`/** text */`) and the usual multi-line form
/// alike.
pub fn clean(raw: &str) -> String {
    raw.lines()
        .filter(|line| {
            let t = line.trim();
            t != OPEN && t != CLOSE
        })
        .map(clean_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn clean_line(line: &str) -> &str {
    let mut s = line.trim();
    if let Some(rest) = s.strip_prefix('*') {
        s = rest.strip_prefix(' ').unwrap_or(rest);
    }
    if let Some(rest) = s.strip_prefix('/') {
        if rest.starts_with('*') {
            s = rest.trim_start_matches('*');
        }
    }
    s = s.strip_suffix(CLOSE).unwrap_or(s);
    s.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_line_block() {
        let raw = "/**\n * Buttons\n *\n * @name button\n * @category forms\n */";
        assert_eq!(clean(raw), "Buttons\n\n@name button\n@category forms");
    }

    #[test]
    fn single_line_block() {
        assert_eq!(clean("/** Just a note */"), "Just a note");
    }

    #[test]
    fn content_on_delimiter_lines() {
        let raw = "/** Title\n * body\n * end */";
        assert_eq!(clean(raw), "Title\nbody\nend");
    }

    #[test]
    fn lines_without_asterisks() {
        let raw = "/**\n   Indented text\n   @name x\n*/";
        assert_eq!(clean(raw), "Indented text\n@name x");
    }

    #[test]
    fn strips_only_one_asterisk() {
        assert_eq!(clean("/**\n * * item\n */"), "* item");
    }

    #[test]
    fn idempotent_on_clean_text() {
        let raw = "/**\n * Cards hold content.\n *\n * @name card\n * @markup card.html\n */";
        let once = clean(raw);
        assert_eq!(clean(&once), once);
    }
}
