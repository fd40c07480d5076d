//! CLI Tooling
//!
//! Command-line interface for catalog generation and inspection. Commands
//! are executed by a [`CliContext`] that returns their output as a string.

use crate::catalog::{
    generate, source_url, Catalog, CatalogBuilder, CatalogQuery, OutputFormat,
};
use crate::config::{CatalogConfig, ConfigLoader};
use crate::error::CatalogError;
use crate::logging::LoggingConfig;
use crate::tooling::format::{
    format_agent_json, format_agent_text, format_agent_list_json, format_agent_list_text,
    format_categories_json, format_categories_text, format_generate_summary,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;

/// agent-catalog - Build the agent showcase data from markdown definitions
#[derive(Parser)]
#[command(name = "agent-catalog")]
#[command(about = "Extracts agent definitions from markdown and emits the site's data module")]
pub struct Cli {
    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The command to run; a bare invocation generates with configured defaults.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }

    /// Fold logging flags over the configured logging settings.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

/// Text or JSON rendering for inspection commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DisplayFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Scan agent definitions and write the generated data artifact
    Generate {
        /// Agents directory (overrides config)
        #[arg(long)]
        agents_dir: Option<PathBuf>,
        /// Output file (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Artifact format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List agents, optionally filtered by category and search text
    List {
        /// Category slug, or "all"
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive search over name, description, category and expertise
        #[arg(long)]
        search: Option<String>,
        /// Output format (text or json)
        #[arg(long, value_enum, default_value = "text")]
        format: DisplayFormat,
    },
    /// Show one agent record
    Show {
        /// Agent identifier (frontmatter `name`)
        agent_id: String,
        /// Output format (text or json)
        #[arg(long, value_enum, default_value = "text")]
        format: DisplayFormat,
    },
    /// Show the category index with agent counts
    Categories {
        /// Output format (text or json)
        #[arg(long, value_enum, default_value = "text")]
        format: DisplayFormat,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate {
            agents_dir: None,
            output: None,
            format: None,
        }
    }
}

/// CLI context: workspace root plus loaded configuration.
pub struct CliContext {
    workspace_root: PathBuf,
    config: CatalogConfig,
}

impl CliContext {
    /// Create a context, loading configuration from `config_path` or the
    /// standard sources for `workspace_root`.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, CatalogError> {
        let workspace_root = dunce::canonicalize(&workspace_root).unwrap_or(workspace_root);
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    pub fn with_config(workspace_root: PathBuf, config: CatalogConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, CatalogError> {
        debug!(command = command_name(command), "Executing command");
        match command {
            Commands::Generate {
                agents_dir,
                output,
                format,
            } => self.handle_generate(agents_dir.as_ref(), output.as_ref(), *format),
            Commands::List {
                category,
                search,
                format,
            } => self.handle_list(category.clone(), search.clone(), *format),
            Commands::Show { agent_id, format } => self.handle_show(agent_id, *format),
            Commands::Categories { format } => self.handle_categories(*format),
            Commands::Config => self.config.to_toml(),
        }
    }

    fn handle_generate(
        &self,
        agents_dir: Option<&PathBuf>,
        output: Option<&PathBuf>,
        format: Option<OutputFormat>,
    ) -> Result<String, CatalogError> {
        let mut request = self.config.generate_request(&self.workspace_root);
        if let Some(dir) = agents_dir {
            request.agents_dir = self.workspace_root.join(dir);
        }
        if let Some(file) = output {
            request.output_file = self.workspace_root.join(file);
        }
        if let Some(format) = format {
            request.format = format;
        }
        let report = generate(&request)?;
        Ok(format_generate_summary(&report))
    }

    fn build_catalog(&self) -> Result<Catalog, CatalogError> {
        let request = self.config.generate_request(&self.workspace_root);
        CatalogBuilder::new(request.extension.as_str()).build(&request.agents_dir)
    }

    fn handle_list(
        &self,
        category: Option<String>,
        search: Option<String>,
        format: DisplayFormat,
    ) -> Result<String, CatalogError> {
        let catalog = self.build_catalog()?;
        let result = catalog.query(&CatalogQuery { category, search })?;
        match format {
            DisplayFormat::Text => Ok(format_agent_list_text(&result)),
            DisplayFormat::Json => format_agent_list_json(&result),
        }
    }

    fn handle_show(&self, agent_id: &str, format: DisplayFormat) -> Result<String, CatalogError> {
        let catalog = self.build_catalog()?;
        let agent = catalog
            .get(agent_id)
            .ok_or_else(|| CatalogError::AgentNotFound(agent_id.to_string()))?;
        let url = source_url(&self.config.output.source_base_url, &agent.filename);
        match format {
            DisplayFormat::Text => Ok(format_agent_text(agent, &url)),
            DisplayFormat::Json => format_agent_json(agent, &url),
        }
    }

    fn handle_categories(&self, format: DisplayFormat) -> Result<String, CatalogError> {
        let catalog = self.build_catalog()?;
        let summaries = catalog.category_summaries();
        match format {
            DisplayFormat::Text => Ok(format_categories_text(&summaries)),
            DisplayFormat::Json => format_categories_json(&summaries),
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::List { .. } => "list",
        Commands::Show { .. } => "show",
        Commands::Categories { .. } => "categories",
        Commands::Config => "config",
    }
}
