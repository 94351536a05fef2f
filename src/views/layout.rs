use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::data::navigation::{footer_links, MAIN_NAVIGATION, TICKETS};
use crate::data::site::{SITE_DESCRIPTION, SITE_NAME, SOCIAL_LINKS};

pub struct Crumb<'a> {
    pub label: &'a str,
    pub href: Option<&'a str>,
}

/// Full page shell: header, navigation, `content`, footer.
pub fn page(title: &str, content: Markup) -> Markup {
    let full_title = if title.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{title} | {SITE_NAME}")
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content=(SITE_DESCRIPTION);
                title { (full_title) }
                link rel="stylesheet" href="/css/site.css";
            }
            body {
                (header())
                main { (content) }
                (footer())
            }
        }
    }
}

fn header() -> Markup {
    html! {
        header.site-header {
            a.logo href="/" { "TEDx" span.accent { "Maitama" } }
            nav.main-nav {
                ul {
                    @for item in MAIN_NAVIGATION {
                        li {
                            a href=(item.href) { (item.label) }
                            @if !item.children.is_empty() {
                                ul.dropdown {
                                    @for child in item.children {
                                        li { a href=(child.href) { (child.label) } }
                                    }
                                }
                            }
                        }
                    }
                }
                a.button.button-primary href=(TICKETS.href) { (TICKETS.label) }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer.site-footer {
            h3 { "Join the Movement" }
            p { "Be the first to know about the new talks, events and opportunities." }
            form.newsletter method="post" action="/newsletter" {
                input type="email" name="email" placeholder="Enter your email" required;
                button type="submit" { "Subscribe" }
            }
            ul.footer-links {
                @for item in footer_links() {
                    li { a href=(item.href) { (item.label) } }
                }
            }
            ul.socials {
                @for link in &SOCIAL_LINKS {
                    li { a href=(link.href) target="_blank" rel="noopener" { (link.label) } }
                }
            }
            p.copyright { "© " (Utc::now().year()) " " (SITE_NAME) ". All rights reserved." }
        }
    }
}

pub fn hero(title: &str, subtitle: Option<&str>, image: &str) -> Markup {
    html! {
        section.hero style=(format!("background-image: url('{image}')")) {
            div.hero-overlay {
                h1 { (title) }
                @if let Some(subtitle) = subtitle {
                    p.hero-subtitle { (subtitle) }
                }
            }
        }
    }
}

pub fn breadcrumbs(items: &[Crumb<'_>]) -> Markup {
    html! {
        nav.breadcrumbs aria-label="Breadcrumb" {
            a href="/" { "Home" }
            @for item in items {
                span.separator { (PreEscaped("&rsaquo;")) }
                @match item.href {
                    Some(href) => a href=(href) { (item.label) },
                    None => span.current { (item.label) },
                }
            }
        }
    }
}
