use std::fs;

use agent_catalog::tooling::cli::{Cli, CliContext, Commands, DisplayFormat};
use agent_catalog::{CatalogError, OutputFormat};
use clap::Parser;
use tempfile::TempDir;

use crate::integration::support::{json_config, write_agent, HDF5_AGENT, PLOT_AGENT};

fn seeded_workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let agents = temp_dir.path().join("agents");
    write_agent(&agents, "hdf5.md", HDF5_AGENT);
    write_agent(&agents, "plot.md", PLOT_AGENT);
    write_agent(&agents, "README.md", "# Agents\n");
    temp_dir
}

fn list(category: Option<&str>, search: Option<&str>) -> Commands {
    Commands::List {
        category: category.map(str::to_string),
        search: search.map(str::to_string),
        format: DisplayFormat::Json,
    }
}

#[test]
fn generate_writes_configured_output_and_summarizes() {
    let temp_dir = seeded_workspace();
    let cli = CliContext::with_config(temp_dir.path().to_path_buf(), json_config());

    let output = cli.execute(&Commands::default()).unwrap();
    assert!(output.contains("Generated agent data for 2 agents"));
    assert!(output.contains("Categories: data-io, analysis-viz"));
    assert!(output.contains("README.md"));

    let written = temp_dir.path().join("website/src/data/agentData.js");
    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(written).unwrap()).unwrap();
    assert_eq!(parsed["agentStats"]["total"], 2);
}

#[test]
fn generate_flags_override_config() {
    let temp_dir = TempDir::new().unwrap();
    write_agent(&temp_dir.path().join("defs"), "plot.md", PLOT_AGENT);
    let cli = CliContext::with_config(temp_dir.path().to_path_buf(), json_config());

    cli.execute(&Commands::Generate {
        agents_dir: Some("defs".into()),
        output: Some("out/data.js".into()),
        format: Some(OutputFormat::Module),
    })
    .unwrap();

    let written = fs::read_to_string(temp_dir.path().join("out/data.js")).unwrap();
    assert!(written.contains("export const agentData"));
}

#[test]
fn list_json_contract_has_required_fields() {
    let temp_dir = seeded_workspace();
    let cli = CliContext::with_config(temp_dir.path().to_path_buf(), json_config());

    let output = cli.execute(&list(None, None)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["shown"], 2);
    assert_eq!(parsed["total"], 2);
    let agents = parsed["agents"].as_array().unwrap();
    assert_eq!(agents[0]["name"], "hdf5-data-io");
    assert_eq!(agents[1]["name"], "plot-analysis");
}

#[test]
fn list_filters_by_category_and_search() {
    let temp_dir = seeded_workspace();
    let cli = CliContext::with_config(temp_dir.path().to_path_buf(), json_config());

    let parsed: serde_json::Value =
        serde_json::from_str(&cli.execute(&list(Some("data-io"), None)).unwrap()).unwrap();
    assert_eq!(parsed["shown"], 1);
    assert_eq!(parsed["agents"][0]["name"], "hdf5-data-io");

    let parsed: serde_json::Value =
        serde_json::from_str(&cli.execute(&list(Some("all"), Some("MATPLOTLIB"))).unwrap())
            .unwrap();
    assert_eq!(parsed["shown"], 1);
    assert_eq!(parsed["agents"][0]["name"], "plot-analysis");

    let parsed: serde_json::Value =
        serde_json::from_str(&cli.execute(&list(Some("workflow"), None)).unwrap()).unwrap();
    assert_eq!(parsed["shown"], 0);
    assert_eq!(parsed["total"], 2);

    let err = cli.execute(&list(Some("gui"), None)).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownCategory(_)));
}

#[test]
fn list_text_reports_counts() {
    let temp_dir = seeded_workspace();
    let cli = CliContext::with_config(temp_dir.path().to_path_buf(), json_config());

    let output = cli
        .execute(&Commands::List {
            category: None,
            search: Some("charts".to_string()),
            format: DisplayFormat::Text,
        })
        .unwrap();
    assert!(output.contains("plot-analysis"));
    assert!(output.contains("Showing 1 of 2 agents"));
}

#[test]
fn show_json_includes_source_url() {
    let temp_dir = seeded_workspace();
    let cli = CliContext::with_config(temp_dir.path().to_path_buf(), json_config());

    let output = cli
        .execute(&Commands::Show {
            agent_id: "hdf5-data-io".to_string(),
            format: DisplayFormat::Json,
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["displayName"], "Hdf5 Data Io");
    assert_eq!(
        parsed["sourceUrl"],
        "https://github.com/iowarp/iowarp_agents/blob/main/agents/hdf5.md"
    );

    let err = cli
        .execute(&Commands::Show {
            agent_id: "missing".to_string(),
            format: DisplayFormat::Text,
        })
        .unwrap_err();
    assert!(matches!(err, CatalogError::AgentNotFound(_)));
}

#[test]
fn categories_json_contract_has_counts() {
    let temp_dir = seeded_workspace();
    let cli = CliContext::with_config(temp_dir.path().to_path_buf(), json_config());

    let output = cli
        .execute(&Commands::Categories {
            format: DisplayFormat::Json,
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["total"], 2);
    let rows = parsed["categories"].as_array().unwrap();
    assert_eq!(rows[0]["slug"], "data-io");
    assert_eq!(rows[0]["agents"], 1);
    assert_eq!(rows[1]["slug"], "analysis-viz");
}

#[test]
fn config_file_flag_is_loaded() {
    let temp_dir = seeded_workspace();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(
        &config_path,
        "[paths]\noutput_file = \"public/agents.json\"\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let cli = CliContext::new(temp_dir.path().to_path_buf(), Some(config_path)).unwrap();
    let rendered = cli.execute(&Commands::Config).unwrap();
    assert!(rendered.contains("public/agents.json"));

    cli.execute(&Commands::default()).unwrap();
    assert!(cli.workspace_root().join("public/agents.json").exists());
}

#[test]
fn parse_matrix() {
    let cli = Cli::try_parse_from(["agent-catalog", "list", "--category", "data-io"]).unwrap();
    assert!(matches!(
        cli.command(),
        Commands::List {
            format: DisplayFormat::Text,
            ..
        }
    ));

    let cli = Cli::try_parse_from(["agent-catalog", "show", "foo", "--format", "json"]).unwrap();
    assert!(matches!(
        cli.command(),
        Commands::Show {
            format: DisplayFormat::Json,
            ..
        }
    ));

    assert!(Cli::try_parse_from(["agent-catalog", "show"]).is_err());
    assert!(Cli::try_parse_from(["agent-catalog", "categories", "--format", "xml"]).is_err());
    assert!(Cli::try_parse_from(["agent-catalog", "config"]).is_ok());
}
