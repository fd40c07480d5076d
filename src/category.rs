//! Agent Categories
//!
//! The closed set of showcase categories and the name-based categorizer.
//! Categories are keyed by their tag slug, so two categories can never collide
//! in the emitted index even if their display names were edited to match.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    DataIo,
    AnalysisViz,
    HpcPerformance,
    ResearchDoc,
    Workflow,
    General,
}

/// Display descriptor emitted for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    pub icon: String,
    pub description: String,
}

/// Substring rules in priority order; the first rule with a matching needle wins.
const RULES: &[(&[&str], Category)] = &[
    (&["data-io"], Category::DataIo),
    (&["analysis", "viz"], Category::AnalysisViz),
    (&["hpc", "performance"], Category::HpcPerformance),
    (&["research", "doc"], Category::ResearchDoc),
    (&["workflow", "orchestrator"], Category::Workflow),
];

impl Category {
    pub const ALL: [Category; 6] = [
        Category::DataIo,
        Category::AnalysisViz,
        Category::HpcPerformance,
        Category::ResearchDoc,
        Category::Workflow,
        Category::General,
    ];

    /// Assign a category from an agent's declared name. Never fails.
    pub fn for_agent_name(name: &str) -> Category {
        RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|needle| name.contains(*needle)))
            .map(|(_, category)| *category)
            .unwrap_or(Category::General)
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::DataIo => "data-io",
            Category::AnalysisViz => "analysis-viz",
            Category::HpcPerformance => "hpc-performance",
            Category::ResearchDoc => "research-doc",
            Category::Workflow => "workflow",
            Category::General => "general",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::DataIo => "Data I/O",
            Category::AnalysisViz => "Analysis & Visualization",
            Category::HpcPerformance => "HPC & Performance",
            Category::ResearchDoc => "Research & Documentation",
            Category::Workflow => "Workflow Management",
            Category::General => "General",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::DataIo => "💾",
            Category::AnalysisViz => "📊",
            Category::HpcPerformance => "🚀",
            Category::ResearchDoc => "📚",
            Category::Workflow => "⚙️",
            Category::General => "🤖",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::DataIo => "Scientific data formats and I/O operations",
            Category::AnalysisViz => "Data analysis and visualization",
            Category::HpcPerformance => "High-performance computing and optimization",
            Category::ResearchDoc => "Research literature and documentation",
            Category::Workflow => "Workflow orchestration and environment management",
            Category::General => "General purpose AI agent",
        }
    }

    pub fn info(self) -> CategoryInfo {
        CategoryInfo {
            name: self.display_name().to_string(),
            icon: self.icon().to_string(),
            description: self.description().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = crate::error::CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| crate::error::CatalogError::UnknownCategory(s.to_string()))
    }
}
