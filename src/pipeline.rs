//! Scan pipeline: walk → read → extract → parse → resolve markup.
//!
//! Files are processed on a bounded worker pool. Results are put back into
//! discovery order before anything downstream sees them, so the assembled
//! document does not depend on which read finished first.

use crate::error::{Diagnostics, Error, Result};
use crate::markup;
use crate::model::ParsedRecord;
use crate::parser::{self, Dialect};
use crate::walker::{self, FileFilter};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_JOBS: usize = 4;

/// Inputs for one scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub style_root: PathBuf,
    /// Defaults to `style_root`.
    pub markup_root: Option<PathBuf>,
    pub filter: FileFilter,
    pub dialect: Dialect,
    pub jobs: usize,
}

impl ScanOptions {
    pub fn new(style_root: impl Into<PathBuf>) -> Self {
        ScanOptions {
            style_root: style_root.into(),
            markup_root: None,
            filter: FileFilter::default(),
            dialect: Dialect::default(),
            jobs: DEFAULT_JOBS,
        }
    }

    fn markup_root(&self) -> &Path {
        self.markup_root.as_deref().unwrap_or(&self.style_root)
    }
}

/// Records of a scan, in discovery order then block order.
#[derive(Debug, Default)]
pub struct Scan {
    pub records: Vec<ParsedRecord>,
    pub diagnostics: Diagnostics,
}

/// Walk the style root and parse every documentation block found.
pub fn scan(opts: &ScanOptions) -> Result<Scan> {
    let mut diagnostics = Diagnostics::default();
    let files = walker::find_style_files(&opts.style_root, &opts.filter, &mut diagnostics)?;
    log::debug!("found {} style file(s) under {}", files.len(), opts.style_root.display());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opts.jobs.max(1))
        .build()
        .map_err(|e| Error::io(&opts.style_root, std::io::Error::other(e.to_string())))?;

    // par_iter().collect() keeps input order.
    let results: Vec<Result<(Vec<ParsedRecord>, Diagnostics)>> =
        pool.install(|| files.par_iter().map(|file| scan_file(opts, file)).collect());

    let mut records = Vec::new();
    for result in results {
        let (file_records, file_diag) = result?;
        records.extend(file_records);
        diagnostics.extend(file_diag);
    }
    log::debug!("parsed {} record(s)", records.len());

    Ok(Scan {
        records,
        diagnostics,
    })
}

fn scan_file(opts: &ScanOptions, file: &Path) -> Result<(Vec<ParsedRecord>, Diagnostics)> {
    let mut diag = Diagnostics::default();
    let source = fs::read_to_string(file).map_err(|e| Error::io(file, e))?;
    let relative = file
        .strip_prefix(&opts.style_root)
        .unwrap_or(file)
        .to_path_buf();

    let comments = parser::parse_source(&relative, &source, opts.dialect, &mut diag)?;
    let mut records = Vec::with_capacity(comments.len());
    for comment in comments {
        let mut record = ParsedRecord::new(comment, &relative);
        markup::resolve(opts.markup_root(), &mut record, &mut diag)?;
        records.push(record);
    }
    log::debug!("{}: {} record(s)", relative.display(), records.len());
    Ok((records, diag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParamValue;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn records_follow_discovery_then_block_order() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.css", "/** @name b1 */\n/** @name b2 */\n");
        write(dir.path(), "a.css", "/** @name a1 */\n");
        write(dir.path(), "c/d.less", "/** @name d1 */\n");
        write(dir.path(), "skip.js", "/** @name js */\n");

        let mut opts = ScanOptions::new(dir.path());
        opts.jobs = 8;
        let scan = scan(&opts).unwrap();
        let names: Vec<_> = scan.records.iter().map(|r| r.param("name").unwrap()).collect();
        assert_eq!(names, vec!["a1", "b1", "b2", "d1"]);
        assert_eq!(scan.records[3].source_path, Path::new("c/d.less"));
    }

    #[test]
    fn markup_defaults_to_style_root() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "widgets/button.less", "/**\n * @name button\n * @markup button.html\n */");
        write(dir.path(), "widgets/button.html", "<button></button>");

        let scan = scan(&ScanOptions::new(dir.path())).unwrap();
        assert_eq!(scan.records[0].markup.as_deref(), Some("<button></button>"));
    }

    #[test]
    fn separate_markup_root() {
        let styles = TempDir::new().unwrap();
        let markup = TempDir::new().unwrap();
        write(styles.path(), "widgets/button.less", "/** @markup example.html */");
        write(markup.path(), "widgets/example.html", "<b>ok</b>");

        let mut opts = ScanOptions::new(styles.path());
        opts.markup_root = Some(markup.path().to_path_buf());
        let scan = scan(&opts).unwrap();
        assert_eq!(scan.records[0].markup.as_deref(), Some("<b>ok</b>"));
        assert_eq!(
            scan.records[0].parameters["markup"],
            ParamValue::Text("example.html".to_string())
        );
    }

    #[test]
    fn missing_markup_aborts() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.css", "/** @name a */");
        write(dir.path(), "b.css", "/** @markup nope.html */");

        let err = scan(&ScanOptions::new(dir.path())).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn strict_dialect_requires_id() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.scss", "/**\n * No id here.\n */\n");

        let mut opts = ScanOptions::new(dir.path());
        opts.dialect = Dialect::Strict;
        let err = scan(&opts).unwrap_err();
        assert!(matches!(err, Error::MissingRequiredParameter { .. }));
    }

    #[test]
    fn missing_root() {
        let dir = TempDir::new().unwrap();
        let err = scan(&ScanOptions::new(dir.path().join("nope"))).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
