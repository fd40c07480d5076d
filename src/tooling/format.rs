//! Format command results as text or JSON.

use crate::catalog::{AgentRecord, CategorySummary, GenerateReport, QueryResult};
use crate::error::CatalogError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Summary printed after a generation run.
pub fn format_generate_summary(report: &GenerateReport) -> String {
    let mut out = format!("Generated agent data for {} agents\n", report.agents);
    out.push_str(&format!("Categories: {}\n", report.categories.join(", ")));
    if !report.skipped.is_empty() {
        out.push_str(&format!("Skipped: {} document(s)\n", report.skipped.len()));
        for skipped in &report.skipped {
            out.push_str(&format!("  {} ({})\n", skipped.filename, skipped.reason));
        }
    }
    out.push_str(&format!(
        "Wrote {} ({})",
        report.output_file.display(),
        report.format
    ));
    out
}

pub fn format_agent_list_text(result: &QueryResult<'_>) -> String {
    if result.agents.is_empty() {
        return format!(
            "No agents found.\n\nShowing 0 of {} agents. Try adjusting your search terms or category filter.",
            result.total
        );
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Agent", "Category", "Tools", "Description"]);
    for agent in &result.agents {
        table.add_row(vec![
            agent.name.clone(),
            format!("{} {}", agent.category_data.icon, agent.category),
            agent.tools.len().to_string(),
            agent.description.clone(),
        ]);
    }
    format!(
        "{}\n\n{}\n\nShowing {} of {} agents",
        format_section_heading("Agents"),
        table,
        result.shown(),
        result.total
    )
}

pub fn format_agent_list_json(result: &QueryResult<'_>) -> Result<String, CatalogError> {
    let out = json!({
        "agents": result.agents,
        "shown": result.shown(),
        "total": result.total,
    });
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn format_agent_text(agent: &AgentRecord, url: &str) -> String {
    let mut out = format!("{}\n\n", format_section_heading(&agent.display_name));
    out.push_str(&format!("Name: {}\n", agent.name));
    out.push_str(&format!(
        "Category: {} {}\n",
        agent.category_data.icon, agent.category
    ));
    if !agent.description.is_empty() {
        out.push_str(&format!("Description: {}\n", agent.description));
    }
    if !agent.tools.is_empty() {
        out.push_str(&format!("Tools: {}\n", agent.tools.join(", ")));
    }
    out.push_str(&format!("Source: {}\n", url));
    out.push_str(&format!("Last modified: {}\n", agent.last_modified));

    push_list(&mut out, "Core Expertise", &agent.expertise);
    push_list(&mut out, "Best Practices", &agent.best_practices);
    if !agent.workflows.is_empty() {
        out.push_str(&format!("\n{}\n", format_section_heading("Common Workflows")));
        for workflow in &agent.workflows {
            out.push_str(&format!("  {}: {}\n", workflow.title, workflow.description));
        }
    }
    out
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("\n{}\n", format_section_heading(title)));
    for item in items {
        out.push_str(&format!("  - {}\n", item));
    }
}

pub fn format_agent_json(agent: &AgentRecord, url: &str) -> Result<String, CatalogError> {
    let mut out = serde_json::to_value(agent)?;
    out["sourceUrl"] = json!(url);
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn format_categories_text(summaries: &[CategorySummary]) -> String {
    if summaries.is_empty() {
        return "No categories found.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Slug", "Category", "Agents", "Description"]);
    for row in summaries {
        table.add_row(vec![
            row.slug.clone(),
            format!("{} {}", row.icon, row.name),
            row.agents.to_string(),
            row.description.clone(),
        ]);
    }
    format!("{}\n\n{}", format_section_heading("Categories"), table)
}

pub fn format_categories_json(summaries: &[CategorySummary]) -> Result<String, CatalogError> {
    let out = json!({
        "categories": summaries,
        "total": summaries.len(),
    });
    Ok(serde_json::to_string_pretty(&out)?)
}
