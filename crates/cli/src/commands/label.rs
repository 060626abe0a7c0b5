use anyhow::Result;
use serde::Serialize;

use gesture_core::slug_to_label;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LabelEntry {
    pub slug: String,
    pub label: String,
}

/// Format each slug as a display label.
pub fn format_labels(slugs: &[String]) -> Vec<LabelEntry> {
    slugs
        .iter()
        .map(|slug| LabelEntry { slug: slug.clone(), label: slug_to_label(slug) })
        .collect()
}

/// Print the label for every slug, one per line.
pub fn label_command(slugs: &[String], json: bool) -> Result<()> {
    let entries = format_labels(slugs);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.label);
    }
    Ok(())
}
