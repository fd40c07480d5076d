use std::fs;

use agent_catalog::catalog::{generate, generate_at, CatalogBuilder};
use agent_catalog::{CatalogError, OutputFormat};
use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use crate::integration::support::{request, write_agent, HDF5_AGENT, PLOT_AGENT};

#[test]
fn nameless_document_is_skipped_and_named_one_kept() {
    let temp_dir = TempDir::new().unwrap();
    let agents = temp_dir.path().join("agents");
    write_agent(&agents, "a.md", "---\nname: foo\n---\nbody");
    write_agent(&agents, "b.md", "no header at all");

    let report = generate(&request(temp_dir.path(), OutputFormat::Json)).unwrap();
    assert_eq!(report.agents, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].filename, "b.md");
    assert_eq!(report.categories, vec!["general".to_string()]);

    let written = fs::read_to_string(&report.output_file).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    let foo = &parsed["agentData"]["foo"];
    assert_eq!(foo["displayName"], "Foo");
    assert_eq!(foo["category"], "General");
    assert_eq!(foo["slug"], "foo");
    assert_eq!(foo["filename"], "a.md");
    assert_eq!(foo["tools"], serde_json::json!([]));
    assert_eq!(parsed["agentStats"]["total"], 1);
    assert_eq!(parsed["agentStats"]["categories"], 1);
}

#[test]
fn generated_json_has_records_and_category_index() {
    let temp_dir = TempDir::new().unwrap();
    let agents = temp_dir.path().join("agents");
    write_agent(&agents, "hdf5.md", HDF5_AGENT);
    write_agent(&agents, "plot.md", PLOT_AGENT);
    write_agent(&agents, "README.md", "# Agents\n\nIndex of agents.\n");
    write_agent(&agents, "notes.txt", "---\nname: ignored\n---\n");

    let report = generate(&request(temp_dir.path(), OutputFormat::Json)).unwrap();
    assert_eq!(report.agents, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].filename, "README.md");

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report.output_file).unwrap()).unwrap();
    let hdf5 = &parsed["agentData"]["hdf5-data-io"];
    assert_eq!(hdf5["displayName"], "Hdf5 Data Io");
    assert_eq!(hdf5["category"], "Data I/O");
    assert_eq!(hdf5["categoryData"]["name"], "Data I/O");
    assert_eq!(hdf5["tools"], serde_json::json!(["Read", "Write", "Bash"]));
    assert_eq!(
        hdf5["expertise"],
        serde_json::json!(["Chunking: layout tuning", "compression filters"])
    );
    assert_eq!(hdf5["bestPractices"], serde_json::json!(["Close handles"]));
    assert_eq!(hdf5["workflows"].as_array().unwrap().len(), 2);
    assert_eq!(hdf5["workflows"][0]["title"], "Inspect a file");
    assert_eq!(hdf5["workflows"][0]["description"], "List groups and datasets");
    assert_eq!(hdf5["filename"], "hdf5.md");

    let plot = &parsed["agentData"]["plot-analysis"];
    assert_eq!(plot["description"], "Draws charts");
    assert_eq!(plot["tools"], serde_json::json!(["Read"]));
    assert_eq!(plot["bestPractices"], serde_json::json!([]));

    let categories = parsed["categories"].as_object().unwrap();
    assert_eq!(categories.len(), 2);
    assert!(categories.contains_key("data-io"));
    assert!(categories.contains_key("analysis-viz"));
}

#[test]
fn module_output_has_three_exports() {
    let temp_dir = TempDir::new().unwrap();
    write_agent(&temp_dir.path().join("agents"), "hdf5.md", HDF5_AGENT);

    let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let report = generate_at(&request(temp_dir.path(), OutputFormat::Module), at).unwrap();
    let written = fs::read_to_string(&report.output_file).unwrap();

    assert!(written.starts_with("// Auto-generated agent data\n"));
    assert!(written.contains("export const agentData = {"));
    assert!(written.contains("export const categories = {"));
    assert!(written.contains("export const agentStats = {\n  total: 1,\n  categories: 1,\n  lastGenerated: \"2025-01-02T03:04:05.000Z\"\n};"));
    assert_eq!(report.generated_at, "2025-01-02T03:04:05.000Z");
}

fn without_stats(module: &str) -> &str {
    let stats = module.find("export const agentStats").unwrap();
    &module[..stats]
}

#[test]
fn regeneration_is_identical_apart_from_timestamp() {
    let temp_dir = TempDir::new().unwrap();
    let agents = temp_dir.path().join("agents");
    write_agent(&agents, "plot.md", PLOT_AGENT);
    write_agent(&agents, "hdf5.md", HDF5_AGENT);
    let req = request(temp_dir.path(), OutputFormat::Module);

    generate_at(&req, Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()).unwrap();
    let first = fs::read_to_string(&req.output_file).unwrap();
    generate_at(&req, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()).unwrap();
    let second = fs::read_to_string(&req.output_file).unwrap();

    assert_eq!(without_stats(&first), without_stats(&second));
    assert!(without_stats(&first).contains("export const categories = {"));
    assert_ne!(first, second);
    assert!(second.contains("lastGenerated: \"2024-06-01T00:00:00.000Z\""));
}

#[test]
fn invalid_utf8_document_does_not_abort_generation() {
    let temp_dir = TempDir::new().unwrap();
    let agents = temp_dir.path().join("agents");
    write_agent(&agents, "good.md", PLOT_AGENT);
    fs::write(agents.join("latin1.md"), b"---\nname: caf\xe9\n---\n").unwrap();

    let report = generate(&request(temp_dir.path(), OutputFormat::Json)).unwrap();
    assert_eq!(report.agents, 2);
    assert!(report.skipped.is_empty());

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report.output_file).unwrap()).unwrap();
    assert!(parsed["agentData"]["plot-analysis"].is_object());
    assert_eq!(parsed["agentData"]["caf\u{FFFD}"]["filename"], "latin1.md");
}

#[test]
fn existing_output_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    write_agent(&temp_dir.path().join("agents"), "plot.md", PLOT_AGENT);
    let req = request(temp_dir.path(), OutputFormat::Module);
    fs::create_dir_all(req.output_file.parent().unwrap()).unwrap();
    fs::write(&req.output_file, "stale contents").unwrap();

    generate(&req).unwrap();
    let written = fs::read_to_string(&req.output_file).unwrap();
    assert!(!written.contains("stale contents"));
    assert!(written.contains("plot-analysis"));
}

#[test]
fn missing_agents_directory_is_fatal_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let req = request(temp_dir.path(), OutputFormat::Module);

    let err = generate(&req).unwrap_err();
    assert!(matches!(err, CatalogError::SourceDirMissing(_)));
    assert!(!req.output_file.exists());
}

#[test]
fn empty_directory_builds_empty_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let agents = temp_dir.path().join("agents");
    fs::create_dir_all(&agents).unwrap();

    let catalog = CatalogBuilder::default().build(&agents).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.categories.is_empty());
}
