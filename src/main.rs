//! apiref — generate an API reference page from a Swagger 2.0 JSON document.
//!
//! Run with no arguments it reads `swagger.json` from the working directory and
//! overwrites `index.md` with operations grouped by tag:
//!
//! 1. **Load** — decode the document, rejecting malformed input
//! 2. **Collect** — gather the unique operation tags, sorted
//! 3. **Group** — per tag, list (path, method) pairs sorted by path then method
//! 4. **Render** — front matter, tag index, one section per tag

mod anchor;
mod error;
mod model;
mod reference;
mod render;

use anchor::AnchorStyle;
use anyhow::{Context, Result};
use clap::Parser;
use error::DocError;
use log::{debug, info};
use model::Document;
use reference::ApiReference;
use render::RenderOptions;
use std::fs;
use std::path::{Path, PathBuf};

/// Front-matter title used when `--title` is not given.
const DEFAULT_TITLE: &str = "Karmada API reference docs";

#[derive(Parser)]
#[command(
    name = "apiref",
    about = "Generate a Markdown API reference page from a Swagger 2.0 JSON document"
)]
struct Cli {
    /// Swagger JSON document. Use - to read from stdin.
    #[arg(short = 'i', long, default_value = "swagger.json")]
    input: PathBuf,

    /// Output file [default: index.<ext> for the chosen format]. Use - for stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Title written to the front matter
    #[arg(short = 't', long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Output format: markdown (default), html, json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// How tag names become index anchors
    #[arg(long, value_enum, default_value_t = AnchorStyle::Lowercase)]
    anchors: AnchorStyle,

    /// Omit the front matter block
    #[arg(long)]
    no_frontmatter: bool,

    /// Log each rendered tag and operation to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let renderer = render::create_renderer(
        &cli.format,
        RenderOptions {
            anchors: cli.anchors,
            frontmatter: !cli.no_frontmatter,
        },
    )?;

    let doc = Document::load(&cli.input)?;
    info!(
        "loaded {} ({:?}, {} paths, swagger {})",
        cli.input.display(),
        doc.info.title,
        doc.paths.len(),
        doc.version
    );

    let reference = reference::build(&doc, &cli.title);
    trace_reference(&reference);

    let output = renderer
        .render(&reference)
        .with_context(|| format!("failed to render {} output", cli.format))?;

    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("index.{}", renderer.file_extension())));
    write_output(&out_path, &output)?;
    info!("wrote {}", out_path.display());

    Ok(())
}

/// Echo the page outline at debug level.
fn trace_reference(reference: &ApiReference) {
    for section in &reference.sections {
        debug!("{}", section.tag);
        for op in &section.operations {
            debug!("  {} {}", op.method, op.path);
        }
    }
}

/// Create or truncate `path` with `content`; `-` prints to stdout.
fn write_output(path: &Path, content: &str) -> Result<(), DocError> {
    if path == Path::new("-") {
        print!("{}", content);
        return Ok(());
    }
    fs::write(path, content).map_err(|e| DocError::write(path.display().to_string(), e))
}
