//! Skillset Page Generator
//!
//! Reads `skillset.json` from the current directory and prints the
//! generated page to stdout, meant to be redirected into a static-site
//! source file:
//!
//! ```text
//! skillset > skillset.html
//! ```

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skillset::loader::{load_skillset, SKILLSET_FILENAME};
use skillset::render::write_document;

/// Skillset Page Generator
#[derive(Parser, Debug)]
#[command(
    name = "skillset",
    version,
    about = "Generate a skillset page from skillset.json"
)]
struct Cli {}

/// Load the document and write the page to stdout.
fn run() -> Result<()> {
    let doc = load_skillset(Path::new(SKILLSET_FILENAME))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_document(&doc, &mut out)?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

// ---- Entry Point -----------------------------------------------------------

fn main() {
    let _cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for the generated page.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Fatal: {:#}", e);
        std::process::exit(1);
    }
}
