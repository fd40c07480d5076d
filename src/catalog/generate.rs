//! The generation run: scan, build, render, overwrite the artifact.

use crate::catalog::builder::CatalogBuilder;
use crate::catalog::emit::{render_catalog, OutputFormat};
use crate::catalog::types::{Catalog, SkippedDocument};
use crate::error::CatalogError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Inputs for one generation run. Paths are used as given.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub agents_dir: PathBuf,
    pub output_file: PathBuf,
    pub extension: String,
    pub format: OutputFormat,
}

/// What a generation run produced.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub agents: usize,
    pub categories: Vec<String>,
    pub skipped: Vec<SkippedDocument>,
    pub output_file: PathBuf,
    pub format: OutputFormat,
    pub generated_at: String,
}

/// Run generation with the current time as the artifact timestamp.
pub fn generate(request: &GenerateRequest) -> Result<GenerateReport, CatalogError> {
    generate_at(request, Utc::now())
}

/// Run generation with an explicit artifact timestamp.
pub fn generate_at(
    request: &GenerateRequest,
    generated_at: DateTime<Utc>,
) -> Result<GenerateReport, CatalogError> {
    info!(
        agents_dir = %request.agents_dir.display(),
        output = %request.output_file.display(),
        "Generating agent data"
    );

    let catalog = CatalogBuilder::new(request.extension.as_str()).build(&request.agents_dir)?;
    let rendered = render_catalog(&catalog, request.format, generated_at)?;
    write_artifact(&request.output_file, &rendered)?;

    let report = GenerateReport {
        agents: catalog.len(),
        categories: category_slugs(&catalog),
        skipped: catalog.skipped,
        output_file: request.output_file.clone(),
        format: request.format,
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    info!(
        agents = report.agents,
        categories = %report.categories.join(", "),
        skipped = report.skipped.len(),
        "Generated agent data for {} agents",
        report.agents
    );
    Ok(report)
}

fn category_slugs(catalog: &Catalog) -> Vec<String> {
    catalog.categories.keys().map(|c| c.slug().to_string()).collect()
}

/// Create the parent directory if needed and replace the file contents.
fn write_artifact(path: &Path, contents: &str) -> Result<(), CatalogError> {
    let write_failed = |source| CatalogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }
    std::fs::write(path, contents).map_err(write_failed)
}
