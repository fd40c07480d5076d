//! Agent Catalog
//!
//! Builds one [`AgentRecord`] per agent definition document, indexes the
//! categories those agents fall into, and emits the generated data artifact
//! consumed by the documentation site.

pub mod builder;
pub mod emit;
pub mod generate;
pub mod query;
pub mod types;

pub use builder::{build_record, CatalogBuilder};
pub use emit::{render_catalog, CatalogStats, OutputFormat};
pub use generate::{generate, generate_at, GenerateReport, GenerateRequest};
pub use query::{source_url, CatalogQuery, CategorySummary, QueryResult};
pub use types::{display_name, AgentRecord, Catalog, SkippedDocument};
