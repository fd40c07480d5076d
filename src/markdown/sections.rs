//! `## ` section splitting.

use std::collections::BTreeMap;

const SECTION_MARKER: &str = "## ";

/// Split a body into sections keyed by their `## ` heading text.
///
/// Lines before the first heading are dropped. A heading that appears more
/// than once accumulates the lines of every occurrence, in source order.
/// Values are trimmed.
pub fn extract_sections(body: &str) -> BTreeMap<String, String> {
    let mut lines_by_section: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in body.split('\n') {
        if let Some(heading) = line.strip_prefix(SECTION_MARKER) {
            let name = heading.trim().to_string();
            lines_by_section.entry(name.clone()).or_default();
            current = Some(name);
        } else if let Some(name) = &current {
            if let Some(lines) = lines_by_section.get_mut(name) {
                lines.push(line);
            }
        }
    }

    lines_by_section
        .into_iter()
        .map(|(name, lines)| (name, lines.join("\n").trim().to_string()))
        .collect()
}
