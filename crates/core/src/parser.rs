// ABOUTME: HTML head metadata parser producing a MetadataRecord.
// ABOUTME: Never fails; malformed or missing structure degrades to absent fields.

use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};

use crate::domain_of;
use crate::record::MetadataRecord;

/// Helper to extract a trimmed, non-empty attribute from the first element
/// matching `selector` within `scope`.
fn first_attr(scope: ElementRef<'_>, selector: &str, attr: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let elem = scope.select(&sel).next()?;
    let value = elem.value().attr(attr)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Helper to extract meta content by name attribute.
fn meta_by_name(scope: ElementRef<'_>, name: &str) -> Option<String> {
    first_attr(scope, &format!("meta[name='{}']", name), "content")
}

/// Helper to extract meta content by property attribute.
fn meta_by_property(scope: ElementRef<'_>, property: &str) -> Option<String> {
    first_attr(scope, &format!("meta[property='{}']", property), "content")
}

/// Scans all meta elements matching `selector` in document order and collects
/// `key_attr -> content` entries. Empty content is skipped. Duplicate keys
/// overwrite in place, so iteration order is first-seen document order with
/// last-wins values.
fn prefixed_meta_map(
    scope: ElementRef<'_>,
    selector: &str,
    key_attr: &str,
) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    if let Ok(sel) = Selector::parse(selector) {
        for elem in scope.select(&sel) {
            if let (Some(key), Some(content)) =
                (elem.value().attr(key_attr), elem.value().attr("content"))
            {
                if !content.is_empty() {
                    map.insert(key.to_string(), content.to_string());
                }
            }
        }
    }
    map
}

/// Parse metadata from an HTML document.
///
/// The input is arbitrary text; unparseable or missing structure yields
/// absent/empty fields rather than an error. Lookup is scoped to the head
/// element when the parsed tree has one, else the whole document.
pub fn parse_meta_html(html: &str) -> MetadataRecord {
    let document = Html::parse_document(html);
    let scope = Selector::parse("head")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .unwrap_or_else(|| document.root_element());

    let title = Selector::parse("title").ok().and_then(|sel| {
        scope.select(&sel).next().and_then(|elem| {
            let text: String = elem.text().collect();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    });

    // description: name="description", falling back to og:description
    let description =
        meta_by_name(scope, "description").or_else(|| meta_by_property(scope, "og:description"));

    let keywords = meta_by_name(scope, "keywords")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    // canonical: link[rel=canonical], falling back to og:url
    let canonical_url = first_attr(scope, "link[rel='canonical']", "href")
        .or_else(|| meta_by_property(scope, "og:url"));

    let og = prefixed_meta_map(scope, "meta[property^='og:']", "property");
    let twitter = prefixed_meta_map(scope, "meta[name^='twitter:']", "name");

    let image = og
        .get("og:image")
        .or_else(|| twitter.get("twitter:image"))
        .cloned();

    let url_display = domain_of(canonical_url.as_deref());

    // Fixed diagnostic checklist, evaluated in this order.
    let mut warnings = Vec::new();
    if title.is_none() {
        warnings.push("No title tag found".to_string());
    }
    if description.is_none() {
        warnings.push("No description meta tag found".to_string());
    }
    if canonical_url.is_none() {
        warnings.push("No canonical URL found".to_string());
    }
    if !og.contains_key("og:title") {
        warnings.push("Missing Open Graph title (og:title)".to_string());
    }
    if !og.contains_key("og:description") {
        warnings.push("Missing Open Graph description (og:description)".to_string());
    }
    if !og.contains_key("og:image") {
        warnings.push("Missing Open Graph image (og:image)".to_string());
    }
    if !twitter.contains_key("twitter:card") {
        warnings.push("Missing Twitter card type (twitter:card)".to_string());
    }

    MetadataRecord {
        title,
        description,
        keywords,
        canonical_url,
        og,
        twitter,
        warnings,
        image,
        url_display,
    }
}
