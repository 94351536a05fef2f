//! Table of contents for blog articles.
//!
//! Headings (`h2`, `h3`) are numbered in document order as `heading-0`,
//! `heading-1`, ... and the ids are written back into the article HTML so the
//! outline links resolve.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::services::reading::strip_tags;

/// Offset added to the scroll position before picking the active heading.
pub const SCROLL_OFFSET: i64 = 150;

static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<h([23])(\s[^>]*)?>(.*?)</h[23]\s*>").expect("valid heading pattern")
});
static ID_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\s+id\s*=\s*("[^"]*"|'[^']*'|[^\s>]+)"#).expect("valid id pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    pub level: u8,
}

#[derive(Debug, Clone, Default)]
pub struct TableOfContents {
    pub entries: Vec<TocEntry>,
    /// Article HTML with heading ids applied.
    pub html: String,
}

impl TableOfContents {
    pub fn build(html: &str) -> Self {
        let mut entries = Vec::new();

        let anchored = HEADING.replace_all(html, |caps: &Captures| {
            let level = if &caps[1] == "2" { 2 } else { 3 };
            let attrs = caps.get(2).map_or("", |m| m.as_str());
            let attrs = ID_ATTR.replace_all(attrs, "");
            let inner = &caps[3];
            let id = format!("heading-{}", entries.len());

            entries.push(TocEntry {
                id: id.clone(),
                text: normalise_text(inner),
                level,
            });

            format!("<h{level} id=\"{id}\"{attrs}>{inner}</h{level}>")
        });

        Self {
            html: anchored.into_owned(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Id of the last heading at or above `scroll + SCROLL_OFFSET`.
///
/// `offsets` pairs heading ids with their vertical offset in document order.
pub fn active_heading<'a>(offsets: &[(&'a str, i64)], scroll: i64) -> Option<&'a str> {
    let position = scroll + SCROLL_OFFSET;
    offsets
        .iter()
        .rev()
        .find(|(_, top)| *top <= position)
        .map(|(id, _)| *id)
}

fn normalise_text(html: &str) -> String {
    let text = strip_tags(html)
        .replace("&amp;", "&")
        .replace("&nbsp;", " ")
        .replace("&#39;", "'")
        .replace("&quot;", "\"");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
