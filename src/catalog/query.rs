//! Showcase filtering over a built catalog.
//!
//! Mirrors what the site's showcase does with the generated data: a category
//! filter, a free-text search and the external link for each record.

use crate::catalog::types::{AgentRecord, Catalog};
use crate::category::Category;
use crate::error::CatalogError;
use serde::Serialize;

/// Category key that selects every agent.
pub const ALL_CATEGORIES: &str = "all";

/// Category filter plus case-insensitive search text.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Matching agents, in identifier order, with the unfiltered total.
#[derive(Debug, Clone)]
pub struct QueryResult<'a> {
    pub agents: Vec<&'a AgentRecord>,
    pub total: usize,
}

impl QueryResult<'_> {
    pub fn shown(&self) -> usize {
        self.agents.len()
    }
}

/// One row of the category overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub slug: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub agents: usize,
}

impl CatalogQuery {
    fn matches_search(needle: &str, agent: &AgentRecord) -> bool {
        agent.display_name.to_lowercase().contains(needle)
            || agent.description.to_lowercase().contains(needle)
            || agent.category.to_lowercase().contains(needle)
            || agent
                .expertise
                .iter()
                .any(|item| item.to_lowercase().contains(needle))
    }
}

impl Catalog {
    /// Apply a showcase query.
    ///
    /// A category slug that is valid but absent from the index matches
    /// nothing; an unknown slug is an error.
    pub fn query(&self, query: &CatalogQuery) -> Result<QueryResult<'_>, CatalogError> {
        let category_name = match query.category.as_deref() {
            None | Some(ALL_CATEGORIES) => None,
            Some(slug) => {
                let category: Category = slug.parse()?;
                Some(self.categories.get(&category).map(|info| info.name.as_str()))
            }
        };
        let needle = query
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let agents = self
            .agents
            .values()
            .filter(|agent| match category_name {
                None => true,
                Some(Some(name)) => agent.category == name,
                Some(None) => false,
            })
            .filter(|agent| match &needle {
                None => true,
                Some(needle) => CatalogQuery::matches_search(needle, agent),
            })
            .collect();

        Ok(QueryResult {
            agents,
            total: self.agents.len(),
        })
    }

    /// Category index rows with the number of agents assigned to each.
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|(category, info)| CategorySummary {
                slug: category.slug().to_string(),
                name: info.name.clone(),
                icon: info.icon.clone(),
                description: info.description.clone(),
                agents: self
                    .agents
                    .values()
                    .filter(|a| a.category_id == *category)
                    .count(),
            })
            .collect()
    }
}

/// External link to an agent's source document.
pub fn source_url(base_url: &str, filename: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), filename)
}
