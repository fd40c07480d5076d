//! Per-document record construction and directory aggregation.

use crate::catalog::types::{display_name, AgentRecord, Catalog, SkippedDocument};
use crate::category::Category;
use crate::error::CatalogError;
use crate::markdown::{
    extract_list_items, extract_sections, extract_workflows, parse_frontmatter,
};
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

const SECTION_EXPERTISE: &str = "Core Expertise";
const SECTION_BEST_PRACTICES: &str = "Best Practices";
const SECTION_WORKFLOWS: &str = "Common Workflows";

/// Build the record for one document.
///
/// Returns `None` when the frontmatter has no non-empty `name`.
pub fn build_record(
    filename: &str,
    content: &str,
    last_modified: DateTime<Utc>,
) -> Option<AgentRecord> {
    let document = parse_frontmatter(content);
    let name = document.text("name").filter(|n| !n.is_empty())?.to_string();
    let description = document.text("description").unwrap_or_default().to_string();
    let tools = document
        .frontmatter
        .get("tools")
        .map(|value| value.to_list())
        .unwrap_or_default();

    let sections = extract_sections(document.body);
    let section = |title: &str| sections.get(title).map(String::as_str).unwrap_or_default();

    let category = Category::for_agent_name(&name);

    Some(AgentRecord {
        display_name: display_name(&name),
        description,
        category: category.display_name().to_string(),
        category_data: category.info(),
        tools,
        expertise: extract_list_items(section(SECTION_EXPERTISE)),
        best_practices: extract_list_items(section(SECTION_BEST_PRACTICES)),
        workflows: extract_workflows(section(SECTION_WORKFLOWS)),
        slug: name.clone(),
        filename: filename.to_string(),
        last_modified: last_modified.to_rfc3339_opts(SecondsFormat::Millis, true),
        category_id: category,
        name,
    })
}

/// Scans a directory of agent definitions into a [`Catalog`].
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    extension: String,
}

impl CatalogBuilder {
    pub fn new(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        let extension = extension.trim_start_matches('.').to_string();
        Self { extension }
    }

    /// Files directly inside `dir` whose name ends with `.<extension>`, in
    /// file-name order.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
        if !dir.is_dir() {
            return Err(CatalogError::SourceDirMissing(dir.to_path_buf()));
        }
        let suffix = format!(".{}", self.extension);
        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(CatalogError::ReadFailed {
                        path: dir.to_path_buf(),
                        source: e.into(),
                    })
                }
                Err(e) => {
                    // Broken links still surface as documents so `build` records them.
                    match e.path().filter(|p| has_suffix(p, &suffix)) {
                        Some(path) => files.push(path.to_path_buf()),
                        None => warn!(error = %e, "Skipping unreadable directory entry"),
                    }
                    continue;
                }
            };
            if entry.file_type().is_file() && has_suffix(entry.path(), &suffix) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    /// Build a catalog from every eligible document in `dir`.
    pub fn build(&self, dir: &Path) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::new();
        for path in self.discover(dir)? {
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let (content, modified) = match read_document(&path) {
                Ok(document) => document,
                Err(e) => {
                    warn!(file = %filename, error = %e, "Skipping unreadable document");
                    catalog.skipped.push(SkippedDocument {
                        filename,
                        reason: format!("unreadable: {}", e),
                    });
                    continue;
                }
            };

            match build_record(&filename, &content, modified) {
                Some(record) => {
                    debug!(file = %filename, agent = %record.name, category = %record.category_id, "Parsed agent definition");
                    let agent = record.name.clone();
                    if let Some(previous) = catalog.insert(record) {
                        warn!(
                            agent = %agent,
                            replaced = %previous,
                            file = %filename,
                            "Duplicate agent name; later file replaces earlier one"
                        );
                    }
                }
                None => {
                    warn!(file = %filename, "Skipping {}: no name in frontmatter", filename);
                    catalog.skipped.push(SkippedDocument {
                        filename,
                        reason: "no name in frontmatter".to_string(),
                    });
                }
            }
        }
        Ok(catalog)
    }
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(suffix))
        .unwrap_or(false)
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new("md")
    }
}

fn read_document(path: &Path) -> Result<(String, DateTime<Utc>), CatalogError> {
    let read_failed = |source| CatalogError::ReadFailed {
        path: path.to_path_buf(),
        source,
    };
    let bytes = std::fs::read(path).map_err(read_failed)?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            warn!(file = %path.display(), "Document is not valid UTF-8; decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    let modified = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(read_failed)?;
    Ok((content, DateTime::<Utc>::from(modified)))
}
