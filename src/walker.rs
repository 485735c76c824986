//! Style file discovery.

use crate::error::{Diagnostics, Error, Result, Warning};
use glob::Pattern;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions recognized as style files.
pub const STYLE_EXTENSIONS: &[&str] = &["css", "scss", "sass", "less", "styl"];

/// Which files under the scan root are documentation sources.
#[derive(Debug, Clone)]
pub struct FileFilter {
    extensions: Vec<String>,
    ignore: Vec<Pattern>,
}

impl Default for FileFilter {
    fn default() -> Self {
        FileFilter {
            extensions: STYLE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignore: Vec::new(),
        }
    }
}

impl FileFilter {
    /// Allow another extension. A leading dot is optional.
    pub fn with_extension(mut self, ext: &str) -> Self {
        let ext = ext.trim_start_matches('.').to_string();
        if !ext.is_empty() && !self.extensions.contains(&ext) {
            self.extensions.push(ext);
        }
        self
    }

    /// Ignore files whose base name matches `pattern`. A plain file name
    /// matches only itself.
    pub fn with_ignore(mut self, pattern: &str) -> Result<Self> {
        let compiled = Pattern::new(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.ignore.push(compiled);
        Ok(self)
    }

    pub fn accepts(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        if !self.extensions.iter().any(|e| e == ext) {
            return false;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        !self.ignore.iter().any(|p| p.matches(&name))
    }
}

/// Check that `root` exists and is a directory.
pub fn check_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotFound(root.to_path_buf())),
        Err(e) => Err(Error::io(root, e)),
    }
}

/// Return every style file under `root`, in a stable discovery order.
///
/// Symbolic links are not followed. Entries that cannot be read are reported
/// and skipped.
pub fn find_style_files(
    root: &Path,
    filter: &FileFilter,
    diag: &mut Diagnostics,
) -> Result<Vec<PathBuf>> {
    check_root(root)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                diag.warn(Warning::Walk {
                    message: e.to_string(),
                });
                continue;
            }
        };
        if entry.file_type().is_file() && filter.accepts(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
