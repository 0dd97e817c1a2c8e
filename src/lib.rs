//! Skillset Page Generator
//!
//! Turns a `skillset.json` document into a Jekyll skillset page:
//! front matter, one titled section per category, and one labelled
//! progress bar per skill, printed to stdout.

pub mod types;
pub mod loader;
pub mod render;
