//! Parser module: block extraction, cleaning and parameter parsing, per dialect.

pub mod comment;
pub mod extract;
pub mod normalize;
pub mod strict;

use crate::error::{Diagnostics, Error, Result, Warning};
use crate::model::Comment;
use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;

/// Which documentation-comment rules to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Any `/** */` block; malformed parameter lines are dropped.
    #[default]
    Permissive,
    /// Exact delimiter lines, mandatory `@id`, malformed lines are errors.
    Strict,
}

/// Parameter the strict dialect requires on every block.
pub const REQUIRED_ID: &str = "id";

/// Parse every documentation block of one file, in file order.
///
/// `path` is only used for messages.
pub fn parse_source(
    path: &Path,
    source: &str,
    dialect: Dialect,
    diag: &mut Diagnostics,
) -> Result<Vec<Comment>> {
    let mut comments = Vec::new();

    for block in extract::blocks(path, source) {
        let (cleaned, on_malformed) = match dialect {
            Dialect::Permissive => (normalize::clean(block.text), comment::Malformed::Drop),
            Dialect::Strict => match strict::clean(&block, source) {
                Some(cleaned) => (cleaned, comment::Malformed::Reject),
                None => {
                    log::debug!("{}: skipping non-strict block at byte {}", path.display(), block.offset);
                    continue;
                }
            },
        };

        let parsed = comment::parse(&cleaned, on_malformed).map_err(|bad| {
            Error::MalformedParameter {
                path: path.to_path_buf(),
                line: bad.0,
            }
        })?;

        for dropped in parsed.dropped {
            diag.warn(match dropped {
                comment::Dropped::Malformed(line) => Warning::MalformedParameter {
                    path: path.to_path_buf(),
                    line,
                },
                comment::Dropped::Orphan(line) => Warning::OrphanContinuation {
                    path: path.to_path_buf(),
                    line,
                },
            });
        }

        let Some(comment) = parsed.comment else {
            continue;
        };
        if dialect == Dialect::Strict && !comment.parameters.contains_key(REQUIRED_ID) {
            return Err(Error::MissingRequiredParameter {
                path: path.to_path_buf(),
                name: REQUIRED_ID,
            });
        }
        comments.push(comment);
    }

    Ok(comments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParamValue;

    fn parse(source: &str, dialect: Dialect) -> (Result<Vec<Comment>>, Diagnostics) {
        let mut diag = Diagnostics::default();
        let result = parse_source(Path::new("w/button.less"), source, dialect, &mut diag);
        (result, diag)
    }

    const STYLE: &str = "\
/**
 * Buttons trigger actions.
 *
 * @name button
 * @category forms
 */
.button { color: red; }

/* ordinary comment */

/** @name button-large
 * @category forms
 * @modifies button */
.button-large {}
";

    #[test]
    fn permissive_reads_all_blocks_in_order() {
        let (result, diag) = parse(STYLE, Dialect::Permissive);
        let comments = result.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].description, "Buttons trigger actions.");
        assert_eq!(
            comments[1].parameters["modifies"],
            ParamValue::Text("button".to_string())
        );
        assert!(diag.is_empty());
    }

    #[test]
    fn file_without_blocks_yields_nothing() {
        let (result, _) = parse(".a { color: red; }\n", Dialect::Permissive);
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn empty_blocks_are_discarded() {
        let (result, _) = parse("/** */\n/**\n *\n */\n", Dialect::Permissive);
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn permissive_reports_dropped_lines() {
        let (result, diag) = parse("/**\n * @ bad\n * stray\n */", Dialect::Permissive);
        assert!(result.unwrap().is_empty());
        assert_eq!(diag.warnings().len(), 2);
        assert!(matches!(
            diag.warnings()[0],
            Warning::MalformedParameter { .. }
        ));
        assert!(matches!(
            diag.warnings()[1],
            Warning::OrphanContinuation { .. }
        ));
    }

    #[test]
    fn strict_skips_loose_blocks() {
        let (result, _) = parse(STYLE, Dialect::Strict);
        let err = result.unwrap_err();
        // The first block is well formed but has no @id.
        assert!(matches!(err, Error::MissingRequiredParameter { name: "id", .. }));
    }

    #[test]
    fn strict_accepts_id_blocks() {
        let src = "/**\n * Primary.\n * @id button/primary\n * @title Primary\n */\n/** @id loose */\n";
        let (result, _) = parse(src, Dialect::Strict);
        let comments = result.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].description, "Primary.");
        assert_eq!(
            comments[0].parameters["id"],
            ParamValue::Text("button/primary".to_string())
        );
    }

    #[test]
    fn strict_accepts_dotted_and_colon_names() {
        let src = "/**\n * Desc.\n * @id button\n * @data.state open\n * @aria:role button\n */\n";
        let (result, _) = parse(src, Dialect::Strict);
        let comments = result.unwrap();
        assert_eq!(
            comments[0].parameters["data.state"],
            ParamValue::Text("open".to_string())
        );
        assert_eq!(
            comments[0].parameters["aria:role"],
            ParamValue::Text("button".to_string())
        );
    }

    #[test]
    fn strict_rejects_malformed_parameter() {
        let src = "/**\n * @id a\n * @\n */\n";
        let (result, _) = parse(src, Dialect::Strict);
        assert!(matches!(
            result.unwrap_err(),
            Error::MalformedParameter { .. }
        ));
    }
}
