//! lanedoc — list the lanes defined in fastlane Fastfiles.
//!
//! Two modes:
//!
//! - **stdin mode**: `lanedoc < fastlane/Fastfile`
//! - **file mode**: `lanedoc -o docs/lanes -f markdown ios/fastlane android/fastlane/Fastfile`

use anyhow::{bail, Context, Result};
use clap::Parser;
use lanedoc::model::Document;
use lanedoc::{parser, render};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lanedoc",
    about = "List fastlane lanes and their desc annotations"
)]
struct Cli {
    /// Input files, directories or glob patterns. If omitted, reads from stdin.
    files: Vec<String>,

    /// Write one output file per input into this directory instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: text (default), markdown, json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Keep lanes whose name matches this regex. Prefix with ! to exclude.
    /// Can be specified multiple times. E.g. --filter 'deploy' --filter '!_internal$'
    #[arg(long)]
    filter: Vec<String>,

    /// Only list lanes that have no desc lines
    #[arg(long)]
    undocumented: bool,
}

/// Compiled `--filter` arguments.
#[derive(Default)]
struct LaneFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
    undocumented: bool,
}

impl LaneFilter {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let mut filter = LaneFilter {
            undocumented: cli.undocumented,
            ..Default::default()
        };
        for raw in &cli.filter {
            let (pattern, excluded) = match raw.strip_prefix('!') {
                Some(rest) => (rest, true),
                None => (raw.as_str(), false),
            };
            let re = Regex::new(pattern)
                .with_context(|| format!("invalid --filter pattern: {}", raw))?;
            if excluded {
                filter.exclude.push(re);
            } else {
                filter.include.push(re);
            }
        }
        Ok(filter)
    }

    fn apply(&self, doc: &mut Document) {
        doc.lanes.retain(|lane| {
            if self.undocumented && lane.is_documented() {
                return false;
            }
            if self.exclude.iter().any(|re| re.is_match(lane.name())) {
                return false;
            }
            self.include.is_empty() || self.include.iter().any(|re| re.is_match(lane.name()))
        });
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let filter = LaneFilter::from_cli(&cli)?;

    if cli.files.is_empty() {
        return stdin_mode(&cli, &filter);
    }

    file_mode(&cli, &filter)
}

/// Warnings to stderr by default; `LANEDOC_LOG=debug` for per-file detail.
fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env("LANEDOC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// stdin mode: read from stdin, extract, write to stdout.
fn stdin_mode(cli: &Cli, filter: &LaneFilter) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let mut doc = Document {
        source: None,
        lanes: lanedoc::extract(&input),
    };
    debug!(lanes = doc.lanes.len(), "extracted lanes from stdin");
    filter.apply(&mut doc);

    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&doc)?);
    Ok(())
}

/// file mode: process every input, write to stdout or to the output directory.
fn file_mode(cli: &Cli, filter: &LaneFilter) -> Result<()> {
    let renderer = render::create_renderer(&cli.format)?;

    if let Some(dir) = cli.output.as_deref() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    }

    let input_files = collect_inputs(&cli.files)?;

    let mut documents: Vec<(PathBuf, Document)> = Vec::new();
    for path in input_files {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut doc = match parser::parse_file(&path, &content) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };
        debug!(file = %path.display(), lanes = doc.lanes.len(), "extracted lanes");
        filter.apply(&mut doc);
        // Nothing worth showing for a file without (matching) lanes
        if doc.lanes.is_empty() {
            continue;
        }
        documents.push((path, doc));
    }

    let Some(dir) = cli.output.as_deref() else {
        let docs: Vec<Document> = documents.into_iter().map(|(_, doc)| doc).collect();
        print!("{}", renderer.render_all(&docs)?);
        return Ok(());
    };

    let paths: Vec<&Path> = documents.iter().map(|(path, _)| path.as_path()).collect();
    let names = derive_output_names(&paths)?;
    for ((_, doc), name) in documents.iter().zip(names) {
        let out_path = dir.join(format!("{}.{}", name, renderer.file_extension()));
        fs::write(&out_path, renderer.render(doc)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// Resolve CLI arguments into the list of files to read.
///
/// Files are taken as given. Directories contribute the Fastfiles sitting
/// directly in them plus every `fastlane/Fastfile*` below them, which is where
/// fastlane keeps them in multi-platform repos. Anything else is a glob.
fn collect_inputs(args: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for arg in args {
        let path = Path::new(arg);
        if path.is_file() {
            files.push(path.to_path_buf());
        } else if path.is_dir() {
            let found = scan_directory(path)?;
            if found.is_empty() {
                warn!("no Fastfile found in {}", path.display());
            }
            files.extend(found);
        } else {
            let matches = glob_files(arg, glob::MatchOptions::new())?;
            if matches.is_empty() {
                warn!("no files matched: {}", arg);
            }
            files.extend(matches);
        }
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && parser::is_fastfile(p))
        .collect();

    let base = dir.to_string_lossy();
    let nested = format!(
        "{}/**/fastlane/Fastfile*",
        glob::Pattern::escape(base.trim_end_matches('/'))
    );
    // Skip .git, .bundle and friends
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };
    found.extend(
        glob_files(&nested, options)?
            .into_iter()
            .filter(|p| parser::is_fastfile(p) && !is_hidden_below(dir, p)),
    );
    Ok(found)
}

/// Whether any directory between `dir` and `path` starts with a dot.
fn is_hidden_below(dir: &Path, path: &Path) -> bool {
    path.strip_prefix(dir)
        .map(|rel| {
            rel.components().any(|c| match c {
                Component::Normal(part) => part.to_string_lossy().starts_with('.'),
                _ => false,
            })
        })
        .unwrap_or(false)
}

fn glob_files(pattern: &str, options: glob::MatchOptions) -> Result<Vec<PathBuf>> {
    Ok(glob::glob_with(pattern, options)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect())
}

/// Output file names (without extension), one per path.
///
/// Starts from the file name ("fastlane/lanes/ios.rb" → "ios"); names shared
/// by several inputs take in parent directories until they differ, so
/// `ios/fastlane/Fastfile` and `android/fastlane/Fastfile` become
/// "ios-fastlane-Fastfile" and "android-fastlane-Fastfile".
fn derive_output_names(paths: &[&Path]) -> Result<Vec<String>> {
    let mut depths = vec![1usize; paths.len()];
    loop {
        let names: Vec<String> = paths
            .iter()
            .zip(&depths)
            .map(|(path, &depth)| output_name(path, depth))
            .collect();

        let clashing: Vec<usize> = {
            let mut by_name: HashMap<&str, Vec<usize>> = HashMap::new();
            for (i, name) in names.iter().enumerate() {
                by_name.entry(name.as_str()).or_default().push(i);
            }
            by_name
                .into_values()
                .filter(|indices| indices.len() > 1)
                .flatten()
                .collect()
        };
        if clashing.is_empty() {
            return Ok(names);
        }

        let mut widened = false;
        for i in clashing {
            if depths[i] < path_segments(paths[i]).len() {
                depths[i] += 1;
                widened = true;
            }
        }
        if !widened {
            let clashes: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            bail!("cannot derive distinct output names for: {}", clashes.join(", "));
        }
    }
}

/// Last `depth` path segments joined by '-', with a trailing `.rb` removed.
fn output_name(path: &Path, depth: usize) -> String {
    let segments = path_segments(path);
    let skip = segments.len().saturating_sub(depth);
    let mut name = segments[skip..].join("-");
    if let Some(stripped) = name.strip_suffix(".rb") {
        name = stripped.to_string();
    }
    name
}

fn path_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect()
}
