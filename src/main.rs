//! stardoc: build a style guide document from `/** ... */` comments in style
//! sheets.
//!
//! Walks a style tree, parses each documentation block into a record
//! (description, `@parameters`, optional example markup) and arranges the
//! records either by `@category` or into a tree keyed by `@id`. The result is
//! written as JSON for an external template, or as a Markdown outline.
//!
//! - `stardoc styles/` gives the category layout, JSON on stdout
//! - `stardoc -l tree -d strict -f md -o guide.md styles/`

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use stardoc::{assemble, config, parser, pipeline, render, walker};

#[derive(Parser)]
#[command(
    name = "stardoc",
    about = "Generate a style guide document from documentation comments in style sheets"
)]
struct Cli {
    /// Style root directory. Overrides `styleFolder` from the config file.
    style_root: Option<PathBuf>,

    /// Markup root directory for @markup files (default: the style root)
    #[arg(short = 'm', long)]
    markup: Option<PathBuf>,

    /// Ignore style files whose name matches this glob. Can be repeated.
    #[arg(short = 'i', long)]
    ignore: Vec<String>,

    /// Additional style file extension. Can be repeated.
    #[arg(short = 'e', long = "ext")]
    extensions: Vec<String>,

    /// Comment dialect
    #[arg(short = 'd', long, value_enum)]
    dialect: Option<parser::Dialect>,

    /// Document layout
    #[arg(short = 'l', long, value_enum)]
    layout: Option<assemble::Layout>,

    /// Output format: json (default), markdown
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Output file. Defaults to stdout, or to `stardoc.<ext>` inside the
    /// config's `outputFolder`.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Number of files read in parallel
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Config file (default: ./stardoc.json if present)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Log every processed file
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config = config::Config::load(cli.config.as_deref(), &cwd)?;
    let renderer = render::create_renderer(&cli.format)?;

    let opts = scan_options(&cli, &config)?;
    let layout = cli.layout.or(config.layout).unwrap_or_default();

    let pipeline::Scan {
        records,
        mut diagnostics,
    } = pipeline::scan(&opts)?;
    let doc = assemble::assemble(layout, records, &mut diagnostics);
    let rendered = renderer.render(&doc)?;

    match output_path(&cli, &config, renderer.file_extension())? {
        Some(path) => fs::write(&path, &rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .context("failed to write to stdout")?,
    }

    if !diagnostics.is_empty() {
        log::warn!("finished with {} warning(s)", diagnostics.warnings().len());
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Merge command-line flags over config values.
fn scan_options(cli: &Cli, config: &config::Config) -> Result<pipeline::ScanOptions> {
    let style_root = cli
        .style_root
        .clone()
        .or_else(|| config.style_folder.clone())
        .context("no style root given: pass STYLE_ROOT or set styleFolder in stardoc.json")?;

    let mut filter = walker::FileFilter::default();
    for ext in config.style_extensions.iter().chain(&cli.extensions) {
        filter = filter.with_extension(ext);
    }
    for pattern in config
        .style_ignore
        .patterns()
        .into_iter()
        .chain(cli.ignore.iter().map(String::as_str))
    {
        filter = filter.with_ignore(pattern)?;
    }

    let mut opts = pipeline::ScanOptions::new(style_root);
    opts.markup_root = cli.markup.clone().or_else(|| config.markup_folder.clone());
    opts.filter = filter;
    opts.dialect = cli.dialect.or(config.dialect).unwrap_or_default();
    opts.jobs = cli.jobs.or(config.jobs).unwrap_or(pipeline::DEFAULT_JOBS);
    Ok(opts)
}

/// Where to write the rendered document; `None` means stdout.
fn output_path(cli: &Cli, config: &config::Config, ext: &str) -> Result<Option<PathBuf>> {
    if let Some(ref path) = cli.output {
        create_parent(path)?;
        return Ok(Some(path.clone()));
    }
    match config.output_folder {
        Some(ref dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
            Ok(Some(dir.join(format!("stardoc.{}", ext))))
        }
        None => Ok(None),
    }
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stardoc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_overrides_config() {
        let config = config::Config::parse(
            r#"{ "styleFolder": "cfg", "dialect": "strict", "jobs": 2, "styleIgnore": "x.less" }"#,
        )
        .unwrap();
        let opts = scan_options(&cli(&["-d", "permissive", "-i", "y.less", "cli"]), &config).unwrap();
        assert_eq!(opts.style_root, PathBuf::from("cli"));
        assert_eq!(opts.dialect, parser::Dialect::Permissive);
        assert_eq!(opts.jobs, 2);
        assert!(!opts.filter.accepts(Path::new("x.less")));
        assert!(!opts.filter.accepts(Path::new("y.less")));
        assert!(opts.filter.accepts(Path::new("z.less")));
    }

    #[test]
    fn config_supplies_defaults() {
        let config = config::Config::parse(r#"{ "styleFolder": "cfg", "styleExtensions": ["js"] }"#)
            .unwrap();
        let opts = scan_options(&cli(&[]), &config).unwrap();
        assert_eq!(opts.style_root, PathBuf::from("cfg"));
        assert_eq!(opts.dialect, parser::Dialect::Permissive);
        assert_eq!(opts.jobs, pipeline::DEFAULT_JOBS);
        assert!(opts.filter.accepts(Path::new("app.js")));
    }

    #[test]
    fn style_root_required() {
        let err = scan_options(&cli(&[]), &config::Config::default()).err().unwrap();
        assert!(err.to_string().contains("no style root given"));
    }

    #[test]
    fn stdout_without_output_settings() {
        let out = output_path(&cli(&["s"]), &config::Config::default(), "json").unwrap();
        assert!(out.is_none());
    }
}
