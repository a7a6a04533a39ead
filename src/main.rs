//! specgen: generate Rust or Go declarations from the HTML rendition of the
//! Swagger 2.0 specification.
//!
//! `specgen 2.0.html -o src/schema.rs` reads the document, extracts every
//! object of its schema section and writes one generated source file.

use anyhow::{Context, Result};
use clap::Parser;
use specgen::config::Loader;
use specgen::render::create_renderer;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "specgen",
    about = "Generate typed declarations from the Swagger 2.0 specification HTML"
)]
struct Cli {
    /// HTML rendition of the specification
    #[arg(default_value = "2.0.html")]
    input: PathBuf,

    /// Output file; "-" writes to stdout. Defaults to schema.<ext> for the target.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output language: rust (default) or go
    #[arg(short = 't', long, default_value = "rust")]
    target: String,

    /// TOML file layered over the built-in configuration
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Package name for targets that declare one (overrides the config)
    #[arg(long)]
    package: Option<String>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("SPECGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let mut loader = Loader::new();
    if let Some(ref path) = cli.config {
        loader = loader.with_file(path);
    }
    if let Some(ref package) = cli.package {
        loader = loader.set_override("output.package", package.as_str())?;
    }
    let config = loader.build().context("failed to load configuration")?;

    let renderer = create_renderer(&cli.target, &config.output)?;

    let html = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let source = specgen::generate(&html, &config, renderer.as_ref())
        .with_context(|| format!("failed to generate from {}", cli.input.display()))?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("schema.{}", renderer.file_extension())));
    write_output(&output, &source)
}

fn write_output(path: &Path, source: &str) -> Result<()> {
    if path == Path::new("-") {
        io::stdout()
            .write_all(source.as_bytes())
            .context("failed to write stdout")?;
        return Ok(());
    }
    fs::write(path, source).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = source.len(), "schema written");
    Ok(())
}
