//! ConfigLoader: composes sources and deserializes to CatalogConfig.

use super::sources;
use super::CatalogConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    /// Precedence: defaults (lowest) -> global file -> workspace file -> environment (highest).
    pub fn load(workspace_root: &Path) -> Result<CatalogConfig, ConfigError> {
        let builder = sources::builder_with_defaults()?;
        let builder = sources::add_global_file(builder)?;
        let builder = sources::add_workspace_file(builder, workspace_root)?;
        let builder = sources::add_environment(builder)?;

        builder.build()?.try_deserialize()
    }

    /// Load configuration from one file with the environment overlay.
    pub fn load_from_file(path: &Path) -> Result<CatalogConfig, ConfigError> {
        let builder = sources::builder_with_defaults()?;
        let builder = sources::add_file(builder, path, true)?;
        let builder = sources::add_environment(builder)?;

        builder.build()?.try_deserialize()
    }
}
