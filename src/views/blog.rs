use maud::{html, Markup, PreEscaped};

use crate::models::BlogPost;
use crate::services::dates::format_long_date;
use crate::services::likes::LikeButton;
use crate::services::listing::{Filter, Page, ALL};
use crate::services::share::ShareLinks;
use crate::services::toc::TableOfContents;
use crate::views::components::{
    blog_card, blog_href, error_notice, like_button, load_more, notice, share_bar, table_of_contents,
};
use crate::views::layout::{breadcrumbs, hero, page, Crumb};
use crate::views::Loaded;

pub const NO_POSTS: &str = "No blog posts found";

pub struct BlogListView {
    pub posts: Page<BlogPost>,
    /// Category names; empty when categories could not be loaded.
    pub categories: Vec<String>,
    pub selected: Filter<String>,
}

pub fn listing_href(category: &Filter<String>, shown: Option<usize>) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();
    if let Filter::Only(name) = category {
        pairs.push(("category", name.clone()));
    }
    if let Some(shown) = shown {
        pairs.push(("shown", shown.to_string()));
    }

    match serde_urlencoded::to_string(&pairs) {
        Ok(qs) if !qs.is_empty() => format!("/blog?{qs}"),
        _ => "/blog".to_string(),
    }
}

pub fn list(view: Loaded<BlogListView>) -> Markup {
    let content = html! {
        (hero("Blog", Some("Stories, insights and ideas from the TEDxMaitama community"), "/images/banner.jpg"))
        section.container.blog {
            @match view {
                Err(message) => (error_notice(message)),
                Ok(view) => {
                    nav.categories aria-label="Blog categories" {
                        a.active[view.selected.is_all()] href=(listing_href(&Filter::All, None)) { (ALL) }
                        @for name in &view.categories {
                            @let filter = Filter::Only(name.clone());
                            a.active[view.selected == filter] href=(listing_href(&filter, None)) { (name) }
                        }
                    }
                    @if view.posts.is_empty() {
                        (notice(NO_POSTS))
                    } @else {
                        div.grid {
                            @for post in &view.posts.items { (blog_card(post)) }
                        }
                        @if view.posts.has_more() {
                            (load_more(&listing_href(&view.selected, Some(view.posts.next_shown()))))
                        }
                    }
                },
            }
        }
    };
    page("Blog", content)
}

pub struct BlogDetailView<'a> {
    pub post: &'a BlogPost,
    pub toc: TableOfContents,
    pub reading_minutes: usize,
    pub share: ShareLinks,
    pub like: LikeButton,
    pub previous: Option<&'a BlogPost>,
    pub next: Option<&'a BlogPost>,
    pub related: Vec<&'a BlogPost>,
}

pub fn detail(view: &BlogDetailView<'_>) -> Markup {
    let post = view.post;
    let content = html! {
        article.container.blog-post {
            (breadcrumbs(&[
                Crumb { label: "Blog", href: Some("/blog") },
                Crumb { label: &post.title, href: None },
            ]))
            header {
                span.badge.badge-category { (post.category_label()) }
                h1 { (post.title) }
                p.meta {
                    span.author { "By " (post.author) }
                    " · "
                    span.date { (format_long_date(post.date_created.as_deref())) }
                    " · "
                    span.reading-time { (view.reading_minutes) " min read" }
                    " · "
                    span.views { (post.views) " views" }
                }
            }
            div.blog-layout {
                (table_of_contents(&view.toc))
                div.blog-content { (PreEscaped(view.toc.html.as_str())) }
            }
            @if !post.tags.is_empty() {
                ul.tags {
                    @for tag in &post.tags { li { "#" (tag) } }
                }
            }
            div.post-actions {
                (like_button(post.id, &view.like))
                (share_bar(&view.share))
            }
            nav.post-navigation {
                @if let Some(previous) = view.previous {
                    a.previous href=(blog_href(previous)) { "← " (previous.title) }
                }
                @if let Some(next) = view.next {
                    a.next href=(blog_href(next)) { (next.title) " →" }
                }
            }
        }
        @if !view.related.is_empty() {
            section.container.related-posts {
                h2 { "Related Posts" }
                div.grid {
                    @for related in &view.related { (blog_card(related)) }
                }
            }
        }
    };
    page(&post.title, content)
}

pub fn unavailable(message: &str) -> Markup {
    let content = html! {
        section.container.unavailable {
            p.error { (message) }
            a href="/blog" { "← Back to blog" }
        }
    };
    page("Blog Post Not Available", content)
}
