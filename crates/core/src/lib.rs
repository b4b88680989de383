// ABOUTME: Core metadata-extraction library for metatag.
// ABOUTME: Parses HTML head metadata and derives reports and preview fields.

pub mod highlight;
pub mod parser;
pub mod preview;
pub mod record;
pub mod report;
pub mod text;

pub use highlight::highlight_html;
pub use parser::parse_meta_html;
pub use preview::{
    chat_embed_preview, microblog_preview, professional_preview, search_preview, PreviewFields,
    Surface,
};
pub use record::MetadataRecord;
pub use report::{to_json, to_markdown};
pub use text::truncate;

// ----------------------------------------------------------------------------
// URL utilities
// ----------------------------------------------------------------------------

use url::Url;

/// Extracts the display domain from a URL: the host (with explicit port kept,
/// matching browser `URL.host` semantics) minus one leading "www." prefix.
/// Returns `None` for missing or unparseable URLs.
pub fn domain_of(url: Option<&str>) -> Option<String> {
    let parsed = Url::parse(url?).ok()?;
    let host = parsed.host_str()?;
    let host = match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };
    match host.strip_prefix("www.") {
        Some(stripped) => Some(stripped.to_string()),
        None => Some(host),
    }
}
