//! Skillset Page Renderer
//!
//! Builds the HTML fragments for the skillset page and writes them in
//! document order: front matter first, then per category a header, a
//! description, and a wrapped list of skill bars.
//!
//! Field values are interpolated into the markup verbatim. There is no
//! HTML escaping anywhere in this module; downstream output must match
//! the page source byte for byte, markup-significant characters
//! included.

use std::io::Write;

use anyhow::{Context, Result};
use serde_json::Number;
use tracing::debug;

use crate::types::SkillsetDoc;

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

/// Fixed front-matter block emitted before any category, consumed by
/// the static-site generator.
pub const FRONT_MATTER: &str = "---\nlayout: page\ntitle: Skillset\n---";

/// Decorative marker appended to every category name, surrounding
/// spaces included.
const CATEGORY_MARKER: &str =
    r#" <i class="fa fa-angle-double-down" aria-hidden="true"></i> "#;

/// Category header line: the name followed by the decorative marker.
pub fn category_header(name: &str) -> String {
    format!(
        "<h1 class='skillset_category_name'>{}{}</h1>",
        name, CATEGORY_MARKER
    )
}

/// Category description line.
pub fn category_description(desc: &str) -> String {
    format!("<h3 class='skillset_category_desc'>{}</h3>", desc)
}

/// One skill rendered as a Bootstrap progress-bar block.
///
/// The percentage appears three times in attributes (label, ARIA value,
/// bar width) plus once in the screen-reader span, each time rendered
/// with the number's own textual form.
pub fn skill_bar(title: &str, percentage: &Number, desc: &str) -> String {
    format!(
        r#"  <hr />
  <div class="container-fluid">
    <div class="row">
      <div class="col-md-4 skilltitle"><b>{title}</b> [{p}%]</div>
      <div class="col-md-8">
        <div class="progress">
          <div class="progress-bar progress-bar-success progress-bar-striped" role="progressbar" aria-valuenow="{p}"
                                                                                                 aria-valuemin="0" aria-valuemax="100" style="width:{p}%">
            <span class="sr-only">{p}%</span>
          </div>
        </div>
      </div>
    </div>
    <div class="row">
      <div style="col-md-12">
      {desc}
      </div>
    </div>
  </div>
"#,
        title = title,
        p = percentage,
        desc = desc,
    )
}

// ---------------------------------------------------------------------------
// Document writer
// ---------------------------------------------------------------------------

/// Write the whole page to `out`, one logical block at a time.
///
/// Categories and skills are emitted exactly in input order; no
/// sorting, no deduplication. Each block ends with a newline.
pub fn write_document<W: Write>(doc: &SkillsetDoc, out: &mut W) -> Result<()> {
    writeln!(out, "{}", FRONT_MATTER).context("Failed to write front matter")?;

    for category in &doc.skills {
        writeln!(out, "{}", category_header(&category.name))
            .context("Failed to write category header")?;
        writeln!(out, "{}", category_description(&category.desc))
            .context("Failed to write category description")?;
        writeln!(out, "<div class='skillset_list'>")
            .context("Failed to write skill list open tag")?;

        for skill in &category.skillset {
            // The skill block already ends with a newline.
            out.write_all(skill_bar(&skill.name, &skill.percentage, &skill.desc).as_bytes())
                .context("Failed to write skill block")?;
        }

        writeln!(out, "</div>").context("Failed to write skill list close tag")?;

        debug!(
            "Rendered category '{}' with {} skills",
            category.name,
            category.skillset.len()
        );
    }

    Ok(())
}
