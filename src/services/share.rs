use crate::data::site::SITE_NAME;

/// Provider share URLs for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub url: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub whatsapp: String,
}

impl ShareLinks {
    pub fn new(url: &str, title: &str) -> Self {
        let text = format!("{title} - {SITE_NAME}");
        Self {
            url: url.to_string(),
            twitter: format!(
                "https://twitter.com/intent/tweet?{}",
                encode(&[("url", url), ("text", text.as_str())])
            ),
            facebook: format!(
                "https://www.facebook.com/sharer/sharer.php?{}",
                encode(&[("u", url)])
            ),
            linkedin: format!(
                "https://www.linkedin.com/sharing/share-offsite/?{}",
                encode(&[("url", url)])
            ),
            whatsapp: format!(
                "https://wa.me/?{}",
                encode(&[("text", format!("{text} {url}").as_str())])
            ),
        }
    }
}

fn encode(pairs: &[(&str, &str)]) -> String {
    // Serialising a slice of string pairs cannot fail.
    serde_urlencoded::to_string(pairs).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_provider_links() {
        let links = ShareLinks::new("https://tedxmaitama.com/blog/3/ideas", "Ideas & Impact");

        assert_eq!(
            links.twitter,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Ftedxmaitama.com%2Fblog%2F3%2Fideas&text=Ideas+%26+Impact+-+TEDxMaitama"
        );
        assert_eq!(
            links.facebook,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Ftedxmaitama.com%2Fblog%2F3%2Fideas"
        );
        assert_eq!(
            links.linkedin,
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Ftedxmaitama.com%2Fblog%2F3%2Fideas"
        );
        assert!(links.whatsapp.starts_with("https://wa.me/?text=Ideas+%26+Impact+-+TEDxMaitama+https%3A%2F%2F"));
        assert_eq!(links.url, "https://tedxmaitama.com/blog/3/ideas");
    }
}
