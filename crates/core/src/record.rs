// ABOUTME: MetadataRecord struct holding metadata extracted from an HTML head.
// ABOUTME: Serializes with camelCase keys in declaration order for stable JSON output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata extracted from an HTML document's head section, plus derived
/// fields (image fallback, display domain, diagnostic warnings).
///
/// Field declaration order fixes the JSON key order. The `og` and `twitter`
/// maps iterate in first-seen document order; inserting an existing key
/// overwrites the value in place (last wins).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub canonical_url: Option<String>,
    /// Open Graph entries, keys carry the "og:" prefix.
    pub og: IndexMap<String, String>,
    /// Twitter Card entries, keys carry the "twitter:" prefix.
    pub twitter: IndexMap<String, String>,
    pub warnings: Vec<String>,
    /// og:image, falling back to twitter:image.
    pub image: Option<String>,
    /// Display domain derived from the canonical URL.
    pub url_display: Option<String>,
}

impl MetadataRecord {
    /// Looks up an Open Graph value by its full key (e.g. "og:title").
    pub fn og_value(&self, key: &str) -> Option<&str> {
        self.og.get(key).map(String::as_str)
    }

    /// Looks up a Twitter Card value by its full key (e.g. "twitter:card").
    pub fn twitter_value(&self, key: &str) -> Option<&str> {
        self.twitter.get(key).map(String::as_str)
    }

    /// Returns true if any diagnostic warnings were recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
