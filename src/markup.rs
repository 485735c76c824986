//! Attach example markup referenced by `@markup`.

use crate::error::{Diagnostics, Error, Result, Warning};
use crate::model::{ParamValue, ParsedRecord};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

pub const MARKUP_PARAM: &str = "markup";

/// Where the markup for `record` lives: the markup root, then the record's
/// own directory, then the parameter value.
///
/// A leading `/` or drive prefix on the value is dropped, so an absolute
/// value still lands below the markup root.
pub fn markup_path(markup_root: &Path, record: &ParsedRecord, file: &str) -> PathBuf {
    let dir = record.source_path.parent().unwrap_or(Path::new(""));
    let relative: PathBuf = Path::new(file)
        .components()
        .filter(|c| matches!(c, Component::Normal(_) | Component::ParentDir))
        .collect();
    markup_root.join(dir).join(relative)
}

/// Load and attach the record's markup file, if it names one.
pub fn resolve(markup_root: &Path, record: &mut ParsedRecord, diag: &mut Diagnostics) -> Result<()> {
    let file = match record.parameters.get(MARKUP_PARAM) {
        None => return Ok(()),
        Some(ParamValue::Flag) => {
            diag.warn(Warning::EmptyMarkup {
                path: record.source_path.clone(),
            });
            return Ok(());
        }
        Some(ParamValue::Text(file)) => file.clone(),
    };

    let path = markup_path(markup_root, record, &file);
    let meta = fs::metadata(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.clone()),
        _ => Error::io(&path, e),
    })?;
    if !meta.is_file() {
        return Err(Error::NotAFile(path));
    }

    let markup = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    record.markup = Some(markup);
    Ok(())
}
