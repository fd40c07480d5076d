//! Configuration
//!
//! Layered configuration for generation runs. Sources, lowest precedence
//! first: built-in defaults, the global file, the workspace file
//! (`agent-catalog.toml`), then `AGENT_CATALOG__*` environment variables.

pub mod loader;
pub mod sources;

pub use loader::ConfigLoader;

use crate::catalog::{GenerateRequest, OutputFormat};
use crate::error::CatalogError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace-level file name.
pub const WORKSPACE_CONFIG_FILE: &str = "agent-catalog.toml";

pub(crate) const DEFAULT_AGENTS_DIR: &str = "agents";
pub(crate) const DEFAULT_OUTPUT_FILE: &str = "website/src/data/agentData.js";
pub(crate) const DEFAULT_EXTENSION: &str = "md";
pub(crate) const DEFAULT_SOURCE_BASE_URL: &str =
    "https://github.com/iowarp/iowarp_agents/blob/main/agents";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory of agent definition documents (relative to workspace root)
    #[serde(default = "default_agents_dir")]
    pub agents_dir: PathBuf,

    /// Generated artifact path (relative to workspace root)
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// File extension of agent definition documents, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_agents_dir() -> PathBuf {
    PathBuf::from(DEFAULT_AGENTS_DIR)
}

fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            agents_dir: default_agents_dir(),
            output_file: default_output_file(),
            extension: default_extension(),
        }
    }
}

impl PathsConfig {
    /// Resolve `(agents_dir, output_file)` against the workspace root.
    pub fn resolve_paths(&self, workspace_root: &Path) -> (PathBuf, PathBuf) {
        (
            workspace_root.join(&self.agents_dir),
            workspace_root.join(&self.output_file),
        )
    }
}

/// Artifact settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Base URL that agent filenames are appended to for source links
    #[serde(default = "default_source_base_url")]
    pub source_base_url: String,
}

fn default_source_base_url() -> String {
    DEFAULT_SOURCE_BASE_URL.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            source_base_url: default_source_base_url(),
        }
    }
}

impl CatalogConfig {
    /// Generation inputs for this configuration rooted at `workspace_root`.
    pub fn generate_request(&self, workspace_root: &Path) -> GenerateRequest {
        let (agents_dir, output_file) = self.paths.resolve_paths(workspace_root);
        GenerateRequest {
            agents_dir,
            output_file,
            extension: self.paths.extension.clone(),
            format: self.output.format,
        }
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, CatalogError> {
        toml::to_string_pretty(self)
            .map_err(|e| CatalogError::ConfigError(format!("Failed to render config: {}", e)))
    }
}
