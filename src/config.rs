//! `stardoc.json` configuration file.
//!
//! Every key is optional; command-line flags take precedence.

use crate::assemble::Layout;
use crate::parser::Dialect;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "stardoc.json";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub style_folder: Option<PathBuf>,
    pub markup_folder: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
    #[serde(default)]
    pub style_ignore: StyleIgnore,
    #[serde(default)]
    pub style_extensions: Vec<String>,
    pub dialect: Option<Dialect>,
    pub layout: Option<Layout>,
    pub jobs: Option<usize>,
}

/// A single file name or a list of patterns.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StyleIgnore {
    One(String),
    Many(Vec<String>),
}

impl Default for StyleIgnore {
    fn default() -> Self {
        StyleIgnore::Many(Vec::new())
    }
}

impl StyleIgnore {
    pub fn patterns(&self) -> Vec<&str> {
        match self {
            StyleIgnore::One(p) => vec![p.as_str()],
            StyleIgnore::Many(ps) => ps.iter().map(String::as_str).collect(),
        }
    }
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid stardoc config")
    }

    /// Read the config from `explicit`, or from `stardoc.json` in `cwd` if
    /// present. Relative folders are resolved against the config's directory.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = cwd.join(DEFAULT_CONFIG);
                if !candidate.is_file() {
                    return Ok(Config::default());
                }
                candidate
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let mut config =
            Config::parse(&text).with_context(|| format!("in {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());

        let base = path.parent().unwrap_or(Path::new(""));
        for folder in [
            &mut config.style_folder,
            &mut config.markup_folder,
            &mut config.output_folder,
        ]
        .into_iter()
        .flatten()
        {
            if folder.is_relative() {
                *folder = base.join(&*folder);
            }
        }
        Ok(config)
    }
}
