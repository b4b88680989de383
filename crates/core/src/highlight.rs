// ABOUTME: Lightweight regex-based HTML syntax highlighter for editor display.
// ABOUTME: Standalone text-to-markup transform, independent of the metadata parser.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)&lt;!--.*?--&gt;").unwrap());
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(&lt;/?)([a-zA-Z0-9:-]+)([^&]*?)(/?&gt;)").unwrap());
static ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([a-zA-Z:-]+)(=)("[^"]*"|'[^']*')"#).unwrap());

/// Converts HTML source text into escaped markup with span class annotations
/// for comments, tag punctuation, tag names, attribute names, and quoted
/// attribute values. Tags containing an escaped `&` in their attribute region
/// are left unannotated rather than mis-highlighted.
pub fn highlight_html(code: &str) -> String {
    let escaped = code
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    let commented = COMMENT_RE.replace_all(&escaped, "<span class=\"html-comment\">$0</span>");

    TAG_RE
        .replace_all(&commented, |caps: &Captures| {
            let attrs = ATTR_RE.replace_all(
                &caps[3],
                "<span class=\"html-attr\">$1</span>$2<span class=\"html-value\">$3</span>",
            );
            format!(
                "<span class=\"html-punct\">{}</span><span class=\"html-tag\">{}</span>{}<span class=\"html-punct\">{}</span>",
                &caps[1], &caps[2], attrs, &caps[4]
            )
        })
        .into_owned()
}
