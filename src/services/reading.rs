use once_cell::sync::Lazy;
use regex::Regex;

pub const WORDS_PER_MINUTE: usize = 200;
pub const EXCERPT_LENGTH: usize = 150;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Text of `html` with each tag turned into a space, for display.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, " ").into_owned()
}

/// Estimated minutes to read `html`, never less than one.
///
/// Tags are dropped without a separator, so words split only by markup
/// (`<p>a</p><p>b</p>`) count once.
pub fn reading_time_minutes(html: &str) -> usize {
    let words = TAG.replace_all(html, "").split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Plain-text preview of at most `max_chars` characters, with `...` when cut.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = strip_tags(html)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if text.chars().count() <= max_chars {
        return text;
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
