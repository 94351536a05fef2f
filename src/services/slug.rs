/// Lower-cases `text` and collapses every run of non-alphanumeric characters
/// into a single `-`, trimming separators at both ends.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Slug for a detail URL; falls back to `{kind}-{id}` when the title has no
/// usable characters.
pub fn canonical_slug(kind: &str, id: i64, title: &str) -> String {
    match slugify(title) {
        slug if slug.is_empty() => format!("{kind}-{id}"),
        slug => slug,
    }
}
