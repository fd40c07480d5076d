//! Frontmatter header parsing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DELIMITER: &str = "---";
const TOOLS_KEY: &str = "tools";

/// A frontmatter value: plain text, or a list for comma-separated `tools`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrontmatterValue {
    Text(String),
    List(Vec<String>),
}

impl FrontmatterValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FrontmatterValue::Text(s) => Some(s),
            FrontmatterValue::List(_) => None,
        }
    }

    /// Items of a list value; a text value is a single item unless empty.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            FrontmatterValue::List(items) => items.clone(),
            FrontmatterValue::Text(s) if s.is_empty() => Vec::new(),
            FrontmatterValue::Text(s) => vec![s.clone()],
        }
    }
}

/// Parsed header keys. Later duplicate keys replace earlier ones.
pub type Frontmatter = BTreeMap<String, FrontmatterValue>;

/// A document split into its header mapping and remaining body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument<'a> {
    pub frontmatter: Frontmatter,
    pub body: &'a str,
}

impl ParsedDocument<'_> {
    pub fn text(&self, key: &str) -> Option<&str> {
        self.frontmatter.get(key).and_then(FrontmatterValue::as_text)
    }
}

/// Split `content` into frontmatter and body.
///
/// The header must open at the very first byte with `---` and close with a
/// later line that starts with `---` followed only by whitespace and a
/// newline. When no such block exists the frontmatter is empty and the body
/// is the untouched input.
pub fn parse_frontmatter(content: &str) -> ParsedDocument<'_> {
    match split_header(content) {
        Some((header, body)) => ParsedDocument {
            frontmatter: parse_header(header),
            body,
        },
        None => ParsedDocument {
            frontmatter: Frontmatter::new(),
            body: content,
        },
    }
}

fn split_header(content: &str) -> Option<(&str, &str)> {
    let after_open = content.strip_prefix(DELIMITER)?;
    let run = whitespace_run(after_open);

    // The header starts after a newline inside the whitespace run that follows
    // the opening delimiter; the last newline is preferred.
    let starts: Vec<usize> = run
        .match_indices('\n')
        .map(|(i, _)| DELIMITER.len() + i + 1)
        .collect();

    for &start in starts.iter().rev() {
        if let Some((header_end, body_start)) = find_closing(content, start) {
            return Some((&content[start..header_end], &content[body_start..]));
        }
    }
    None
}

/// Find the earliest `\n---` at or after `from` that is followed by a
/// whitespace run containing a newline. Returns the header end and the body
/// start (just past the last newline of that run).
fn find_closing(content: &str, from: usize) -> Option<(usize, usize)> {
    let marker = "\n---";
    let mut search = from;
    while let Some(offset) = content[search..].find(marker) {
        let header_end = search + offset;
        let after = header_end + marker.len();
        let run = whitespace_run(&content[after..]);
        if let Some(last_newline) = run.rfind('\n') {
            return Some((header_end, after + last_newline + 1));
        }
        search = header_end + 1;
    }
    None
}

fn whitespace_run(s: &str) -> &str {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    &s[..end]
}

fn parse_header(header: &str) -> Frontmatter {
    let mut frontmatter = Frontmatter::new();
    for line in header.split('\n') {
        let Some(colon) = line.find(':') else {
            continue;
        };
        if colon == 0 {
            continue;
        }
        let key = line[..colon].trim();
        let value = strip_quotes(line[colon + 1..].trim());

        let value = if key == TOOLS_KEY && value.contains(',') {
            FrontmatterValue::List(value.split(',').map(|t| t.trim().to_string()).collect())
        } else {
            FrontmatterValue::Text(value.to_string())
        };
        frontmatter.insert(key.to_string(), value);
    }
    frontmatter
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
