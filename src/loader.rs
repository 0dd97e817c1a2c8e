//! Skillset Loader
//!
//! Reads `skillset.json` from the working directory and parses it into
//! the in-memory document. Any failure is fatal for the run; there is
//! no retry or partial recovery.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::types::SkillsetDoc;

/// Fixed input file name, resolved against the current directory.
pub const SKILLSET_FILENAME: &str = "skillset.json";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse raw JSON text into a [`SkillsetDoc`].
///
/// Every field of the document shape is required; a missing `skills`,
/// `skillset`, `name`, `desc`, or `percentage` key is a parse error.
pub fn parse_skillset(raw: &str) -> Result<SkillsetDoc> {
    serde_json::from_str(raw).context("Failed to parse skillset JSON")
}

/// Read and parse the skillset document at `path`.
pub fn load_skillset(path: &Path) -> Result<SkillsetDoc> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let doc = parse_skillset(&raw)
        .with_context(|| format!("Invalid skillset document: {}", path.display()))?;

    debug!(
        "Loaded {} categories from {}",
        doc.skills.len(),
        path.display()
    );

    Ok(doc)
}
