//! Markdown Extraction
//!
//! Single-pass text extractors for agent definition documents: the
//! `---`-delimited frontmatter header, `## ` sections, bullet lists and
//! `### ` workflow entries. None of them fail; malformed input degrades to
//! empty results.

pub mod frontmatter;
pub mod lists;
pub mod sections;
pub mod workflows;

pub use frontmatter::{parse_frontmatter, Frontmatter, FrontmatterValue, ParsedDocument};
pub use lists::extract_list_items;
pub use sections::extract_sections;
pub use workflows::{extract_workflows, Workflow};
