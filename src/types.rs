//! Skillset Page Generator - Type Definitions
//!
//! Data model for the `skillset.json` input document. The document is
//! read-only for the whole run; nothing here is ever written back.

use serde::Deserialize;
use serde_json::Number;

// ─── Input Document ──────────────────────────────────────────────

/// Top-level shape of `skillset.json`.
#[derive(Clone, Debug, Deserialize)]
pub struct SkillsetDoc {
    pub skills: Vec<Category>,
}

/// A named grouping of related skills with a shared description.
#[derive(Clone, Debug, Deserialize)]
pub struct Category {
    pub name: String,
    pub desc: String,
    pub skillset: Vec<Skill>,
}

/// A single competency within a category.
#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency as supplied in the document. Carried as a raw JSON
    /// number and rendered verbatim; the 0-100 range is assumed, never
    /// checked.
    pub percentage: Number,
    pub desc: String,
}
