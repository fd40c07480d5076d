//! `### ` workflow entry extraction.

use serde::{Deserialize, Serialize};

const WORKFLOW_MARKER: &str = "### ";
const SECTION_MARKER: &str = "## ";

/// A workflow entry: heading title and the first line of its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub title: String,
    pub description: String,
}

impl Workflow {
    fn from_block(title: &str, lines: &[&str]) -> Self {
        let title = title.trim().to_string();
        let joined = lines.join("\n");
        let first_line = joined
            .trim()
            .split('\n')
            .next()
            .map(str::trim_end)
            .unwrap_or_default();
        let description = if first_line.is_empty() {
            title.clone()
        } else {
            first_line.to_string()
        };
        Self { title, description }
    }
}

/// Extract every `### ` entry, ending each at the next `### ` or `## `
/// heading line or at end of input.
pub fn extract_workflows(content: &str) -> Vec<Workflow> {
    let mut workflows = Vec::new();
    let mut open: Option<(&str, Vec<&str>)> = None;

    for line in content.split('\n') {
        if let Some(title) = line.strip_prefix(WORKFLOW_MARKER) {
            if let Some((prev, lines)) = open.take() {
                workflows.push(Workflow::from_block(prev, &lines));
            }
            if !title.is_empty() {
                open = Some((title, Vec::new()));
            }
        } else if line.starts_with(SECTION_MARKER) {
            if let Some((prev, lines)) = open.take() {
                workflows.push(Workflow::from_block(prev, &lines));
            }
        } else if let Some((_, lines)) = open.as_mut() {
            lines.push(line);
        }
    }
    if let Some((prev, lines)) = open {
        workflows.push(Workflow::from_block(prev, &lines));
    }

    workflows
}
