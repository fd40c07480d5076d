//! Rendering the generated data artifact.

use crate::catalog::types::{AgentRecord, Catalog};
use crate::category::{Category, CategoryInfo};
use crate::error::CatalogError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const MODULE_BANNER: &str = "// Auto-generated agent data\n// DO NOT EDIT - Run `agent-catalog generate` to update\n";

/// Artifact format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JavaScript data module exporting `agentData`, `categories` and `agentStats`
    #[default]
    Module,
    /// Single JSON document with the same three values
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Module => write!(f, "module"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Summary counters written next to the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub categories: usize,
    pub last_generated: String,
}

impl CatalogStats {
    pub fn new(catalog: &Catalog, generated_at: DateTime<Utc>) -> Self {
        Self {
            total: catalog.agents.len(),
            categories: catalog.categories.len(),
            last_generated: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactDocument<'a> {
    agent_data: &'a BTreeMap<String, AgentRecord>,
    categories: &'a BTreeMap<Category, CategoryInfo>,
    agent_stats: &'a CatalogStats,
}

/// Render the catalog in the requested format.
pub fn render_catalog(
    catalog: &Catalog,
    format: OutputFormat,
    generated_at: DateTime<Utc>,
) -> Result<String, CatalogError> {
    let stats = CatalogStats::new(catalog, generated_at);
    match format {
        OutputFormat::Module => render_module(catalog, &stats),
        OutputFormat::Json => {
            let doc = ArtifactDocument {
                agent_data: &catalog.agents,
                categories: &catalog.categories,
                agent_stats: &stats,
            };
            let mut out = serde_json::to_string_pretty(&doc)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_module(catalog: &Catalog, stats: &CatalogStats) -> Result<String, CatalogError> {
    let agents = serde_json::to_string_pretty(&catalog.agents)?;
    let categories = serde_json::to_string_pretty(&catalog.categories)?;
    let last_generated = serde_json::to_string(&stats.last_generated)?;

    let mut out = String::from(MODULE_BANNER);
    out.push_str(&format!("\nexport const agentData = {};\n", agents));
    out.push_str(&format!("\nexport const categories = {};\n", categories));
    out.push_str(&format!(
        "\nexport const agentStats = {{\n  total: {},\n  categories: {},\n  lastGenerated: {}\n}};\n",
        stats.total, stats.categories, last_generated
    ));
    Ok(out)
}
