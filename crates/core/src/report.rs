// ABOUTME: Report formatters serializing a MetadataRecord to JSON and Markdown.
// ABOUTME: Both are pure; output spacing and key order are fixed for stability.

use crate::record::MetadataRecord;

/// Serializes the full record as pretty-printed JSON (2-space indent, keys in
/// declaration order). Lossless: parsing the output back reproduces the record.
pub fn to_json(record: &MetadataRecord) -> String {
    serde_json::to_string_pretty(record).unwrap_or_default()
}

/// Renders the record as a fixed-template Markdown report.
///
/// Scalar lines are omitted when absent. The Open Graph and Twitter section
/// headers always render, with one `- key: value` line per entry. The
/// Warnings section renders only when warnings exist.
pub fn to_markdown(record: &MetadataRecord) -> String {
    let mut lines: Vec<String> = vec!["# MetaTag Report".to_string()];

    if let Some(ref title) = record.title {
        lines.push(format!("\n**Title:** {}", title));
    }
    if let Some(ref description) = record.description {
        lines.push(format!("\n**Description:** {}", description));
    }
    if let Some(ref canonical) = record.canonical_url {
        lines.push(format!("\n**Canonical:** {}", canonical));
    }
    if !record.keywords.is_empty() {
        lines.push(format!("\n**Keywords:** {}", record.keywords.join(", ")));
    }

    lines.push("\n## Open Graph".to_string());
    for (key, value) in &record.og {
        lines.push(format!("- {}: {}", key, value));
    }

    lines.push("\n## Twitter".to_string());
    for (key, value) in &record.twitter {
        lines.push(format!("- {}: {}", key, value));
    }

    if !record.warnings.is_empty() {
        lines.push("\n## Warnings".to_string());
        for warning in &record.warnings {
            lines.push(format!("- {}", warning));
        }
    }

    lines.join("\n")
}
