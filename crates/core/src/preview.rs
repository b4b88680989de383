// ABOUTME: Preview field resolvers for search and social link-preview surfaces.
// ABOUTME: Each resolver applies a fixed fallback chain over a MetadataRecord.

use serde::Serialize;

use crate::record::MetadataRecord;
use crate::text::truncate;

const SEARCH_TITLE_MAX: usize = 60;
const SEARCH_DESCRIPTION_MAX: usize = 155;
const CHAT_EMBED_TITLE_MAX: usize = 80;
const MICROBLOG_TITLE_MAX: usize = 100;
const PROFESSIONAL_TITLE_MAX: usize = 80;

/// Display-ready fields resolved for one preview surface.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PreviewFields {
    pub title: String,
    pub description: String,
    /// Absent means the renderer shows a neutral placeholder block.
    pub image: Option<String>,
    pub domain: String,
}

/// A preview target surface. Each surface has its own fallback chain and
/// title length limit; descriptions are truncated only on the search surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Search,
    ChatEmbed,
    Microblog,
    ProfessionalNetwork,
}

impl Surface {
    /// Resolves display fields for this surface from a parsed record.
    pub fn resolve(&self, record: &MetadataRecord) -> PreviewFields {
        match self {
            Surface::Search => search_preview(record),
            Surface::ChatEmbed => chat_embed_preview(record),
            Surface::Microblog => microblog_preview(record),
            Surface::ProfessionalNetwork => professional_preview(record),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Search-engine result snippet: document title and description with fixed
/// placeholders; no image.
pub fn search_preview(record: &MetadataRecord) -> PreviewFields {
    let title = match non_empty(record.title.as_deref()) {
        Some(title) => truncate(title, SEARCH_TITLE_MAX),
        None => "Untitled Page".to_string(),
    };
    let description = match non_empty(record.description.as_deref()) {
        Some(description) => truncate(description, SEARCH_DESCRIPTION_MAX),
        None => "No description provided.".to_string(),
    };
    PreviewFields {
        title,
        description,
        image: None,
        domain: display_domain(record),
    }
}

/// Chat embed card: Open Graph first, then document fields.
pub fn chat_embed_preview(record: &MetadataRecord) -> PreviewFields {
    let title = non_empty(record.og_value("og:title"))
        .or_else(|| non_empty(record.title.as_deref()))
        .unwrap_or("Untitled");
    let description = non_empty(record.og_value("og:description"))
        .or_else(|| non_empty(record.description.as_deref()))
        .unwrap_or("");
    PreviewFields {
        title: truncate(title, CHAT_EMBED_TITLE_MAX),
        description: description.to_string(),
        image: record.image.clone(),
        domain: display_domain(record),
    }
}

/// Microblog card: Twitter Card first, then Open Graph, then document fields.
pub fn microblog_preview(record: &MetadataRecord) -> PreviewFields {
    let title = non_empty(record.twitter_value("twitter:title"))
        .or_else(|| non_empty(record.og_value("og:title")))
        .or_else(|| non_empty(record.title.as_deref()))
        .unwrap_or("Untitled");
    let description = non_empty(record.twitter_value("twitter:description"))
        .or_else(|| non_empty(record.og_value("og:description")))
        .or_else(|| non_empty(record.description.as_deref()))
        .unwrap_or("");
    let image = non_empty(record.twitter_value("twitter:image"))
        .or_else(|| non_empty(record.og_value("og:image")))
        .map(str::to_string);
    PreviewFields {
        title: truncate(title, MICROBLOG_TITLE_MAX),
        description: description.to_string(),
        image,
        domain: display_domain(record),
    }
}

/// Professional-network card: Open Graph first, with the image chain
/// preferring og:image over twitter:image.
pub fn professional_preview(record: &MetadataRecord) -> PreviewFields {
    let title = non_empty(record.og_value("og:title"))
        .or_else(|| non_empty(record.title.as_deref()))
        .unwrap_or("Untitled");
    let description = non_empty(record.og_value("og:description"))
        .or_else(|| non_empty(record.description.as_deref()))
        .unwrap_or("");
    let image = non_empty(record.og_value("og:image"))
        .or_else(|| non_empty(record.twitter_value("twitter:image")))
        .map(str::to_string);
    PreviewFields {
        title: truncate(title, PROFESSIONAL_TITLE_MAX),
        description: description.to_string(),
        image,
        domain: display_domain(record),
    }
}

fn display_domain(record: &MetadataRecord) -> String {
    non_empty(record.url_display.as_deref())
        .unwrap_or("example.com")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> MetadataRecord {
        let mut record = MetadataRecord {
            title: Some("Doc Title".to_string()),
            description: Some("Doc description.".to_string()),
            url_display: Some("x.com".to_string()),
            image: Some("og.png".to_string()),
            ..Default::default()
        };
        record.og.insert("og:title".to_string(), "OG Title".to_string());
        record
            .og
            .insert("og:description".to_string(), "OG description.".to_string());
        record.og.insert("og:image".to_string(), "og.png".to_string());
        record
            .twitter
            .insert("twitter:title".to_string(), "TW Title".to_string());
        record
            .twitter
            .insert("twitter:description".to_string(), "TW description.".to_string());
        record
            .twitter
            .insert("twitter:image".to_string(), "tw.png".to_string());
        record
    }

    #[test]
    fn search_uses_document_fields() {
        let fields = search_preview(&full_record());
        assert_eq!(fields.title, "Doc Title");
        assert_eq!(fields.description, "Doc description.");
        assert_eq!(fields.image, None);
        assert_eq!(fields.domain, "x.com");
    }

    #[test]
    fn search_placeholders_on_empty_record() {
        let fields = search_preview(&MetadataRecord::default());
        assert_eq!(fields.title, "Untitled Page");
        assert_eq!(fields.description, "No description provided.");
        assert_eq!(fields.domain, "example.com");
    }

    #[test]
    fn search_truncates_long_title() {
        let record = MetadataRecord {
            title: Some("word ".repeat(30).trim_end().to_string()),
            ..Default::default()
        };
        let fields = search_preview(&record);
        assert!(fields.title.ends_with('…'));
        assert!(fields.title.chars().count() <= 60);
    }

    #[test]
    fn chat_embed_prefers_open_graph() {
        let fields = chat_embed_preview(&full_record());
        assert_eq!(fields.title, "OG Title");
        assert_eq!(fields.description, "OG description.");
        assert_eq!(fields.image, Some("og.png".to_string()));
    }

    #[test]
    fn chat_embed_falls_back_to_document_then_placeholder() {
        let record = MetadataRecord {
            title: Some("Doc Title".to_string()),
            ..Default::default()
        };
        let fields = chat_embed_preview(&record);
        assert_eq!(fields.title, "Doc Title");
        assert_eq!(fields.description, "");

        let fields = chat_embed_preview(&MetadataRecord::default());
        assert_eq!(fields.title, "Untitled");
        assert_eq!(fields.image, None);
    }

    #[test]
    fn microblog_prefers_twitter_chain() {
        let fields = microblog_preview(&full_record());
        assert_eq!(fields.title, "TW Title");
        assert_eq!(fields.description, "TW description.");
        assert_eq!(fields.image, Some("tw.png".to_string()));
    }

    #[test]
    fn microblog_image_falls_back_to_og() {
        let mut record = full_record();
        record.twitter.shift_remove("twitter:image");
        let fields = microblog_preview(&record);
        assert_eq!(fields.image, Some("og.png".to_string()));
    }

    #[test]
    fn professional_prefers_og_image_over_twitter() {
        let fields = professional_preview(&full_record());
        assert_eq!(fields.title, "OG Title");
        assert_eq!(fields.image, Some("og.png".to_string()));

        let mut record = full_record();
        record.og.shift_remove("og:image");
        let fields = professional_preview(&record);
        assert_eq!(fields.image, Some("tw.png".to_string()));
    }

    #[test]
    fn non_search_descriptions_are_not_truncated() {
        let long = "word ".repeat(100).trim_end().to_string();
        let mut record = MetadataRecord::default();
        record
            .og
            .insert("og:description".to_string(), long.clone());
        let fields = chat_embed_preview(&record);
        assert_eq!(fields.description, long);
    }

    #[test]
    fn surface_resolve_dispatches() {
        let record = full_record();
        assert_eq!(Surface::Search.resolve(&record), search_preview(&record));
        assert_eq!(
            Surface::Microblog.resolve(&record),
            microblog_preview(&record)
        );
    }
}
