//! Agent Catalog: Agent Definition Extraction
//!
//! Reads a directory of markdown agent definitions (frontmatter header plus
//! `##` sections), classifies each agent into a fixed category set, and emits
//! the data artifact the showcase website imports.

pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod tooling;

pub use catalog::{generate, AgentRecord, Catalog, CatalogBuilder, GenerateRequest, OutputFormat};
pub use category::{Category, CategoryInfo};
pub use error::CatalogError;
