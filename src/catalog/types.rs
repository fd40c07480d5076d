//! Catalog record types.

use crate::category::{Category, CategoryInfo};
use crate::markdown::Workflow;
use serde::Serialize;
use std::collections::BTreeMap;

/// Derived record for one agent definition document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    pub name: String,
    pub display_name: String,
    pub description: String,
    /// Category display name.
    pub category: String,
    pub category_data: CategoryInfo,
    pub tools: Vec<String>,
    pub expertise: Vec<String>,
    pub best_practices: Vec<String>,
    pub workflows: Vec<Workflow>,
    pub slug: String,
    pub filename: String,
    /// ISO-8601 UTC modification time of the source document.
    pub last_modified: String,
    #[serde(skip)]
    pub category_id: Category,
}

/// A document left out of the catalog because its frontmatter had no `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDocument {
    pub filename: String,
    pub reason: String,
}

/// Agents keyed by identifier plus the categories they use.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub agents: BTreeMap<String, AgentRecord>,
    pub categories: BTreeMap<Category, CategoryInfo>,
    pub skipped: Vec<SkippedDocument>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, replacing any earlier record with the same identifier.
    ///
    /// Returns the filename of the replaced record, if any.
    pub fn insert(&mut self, record: AgentRecord) -> Option<String> {
        self.categories
            .entry(record.category_id)
            .or_insert_with(|| record.category_data.clone());
        self.agents
            .insert(record.name.clone(), record)
            .map(|previous| previous.filename)
    }

    pub fn get(&self, agent_id: &str) -> Option<&AgentRecord> {
        self.agents.get(agent_id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Human-readable form of a hyphenated identifier: `hdf5-data-io` → `Hdf5 Data Io`.
pub fn display_name(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
