//! Bullet list extraction.

/// Collect `- ` and `* ` bullet items from a block of text, in order.
///
/// A leading `**Label**` span becomes `Label: `, with an optional colon
/// directly after the span and any following whitespace absorbed.
pub fn extract_list_items(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter_map(|line| {
            let trimmed = line.trim();
            trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
                .map(collapse_bold_label)
        })
        .collect()
}

fn collapse_bold_label(item: &str) -> String {
    let Some(inner) = item.strip_prefix("**") else {
        return item.to_string();
    };
    // The label holds at least one character and ends at the next `**`.
    let Some(first) = inner.chars().next() else {
        return item.to_string();
    };
    let label_start = first.len_utf8();
    let Some(close) = inner[label_start..].find("**").map(|i| i + label_start) else {
        return item.to_string();
    };

    let label = &inner[..close];
    let rest = &inner[close + 2..];
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    format!("{}: {}", label, rest.trim_start())
}
