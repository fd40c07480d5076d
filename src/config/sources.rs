//! Configuration sources added to a `config` builder.

use super::{
    DEFAULT_AGENTS_DIR, DEFAULT_EXTENSION, DEFAULT_OUTPUT_FILE, DEFAULT_SOURCE_BASE_URL,
    WORKSPACE_CONFIG_FILE,
};
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File, FileFormat};
use std::path::{Path, PathBuf};

/// Environment prefix: `AGENT_CATALOG__PATHS__AGENTS_DIR=defs`.
pub const ENV_PREFIX: &str = "AGENT_CATALOG";

/// Builder seeded with the built-in defaults.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("paths.agents_dir", DEFAULT_AGENTS_DIR)?
        .set_default("paths.output_file", DEFAULT_OUTPUT_FILE)?
        .set_default("paths.extension", DEFAULT_EXTENSION)?
        .set_default("output.format", "module")?
        .set_default("output.source_base_url", DEFAULT_SOURCE_BASE_URL)
}

/// Global config file path: `<platform config dir>/config.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "agent-catalog")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the global file when the platform config directory is known.
pub fn add_global_file(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Some(path) => add_file(builder, &path, false),
        None => Ok(builder),
    }
}

/// Add `<workspace>/agent-catalog.toml` if it exists.
pub fn add_workspace_file(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    add_file(builder, &workspace_root.join(WORKSPACE_CONFIG_FILE), false)
}

/// Add a TOML file source.
pub fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let name = path
        .to_str()
        .ok_or_else(|| ConfigError::Message(format!("Non UTF-8 config path: {:?}", path)))?;
    Ok(builder.add_source(File::new(name, FileFormat::Toml).required(required)))
}

/// Add the `AGENT_CATALOG__SECTION__KEY` environment overlay.
pub fn add_environment(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    ))
}
