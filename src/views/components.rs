use maud::{html, Markup, PreEscaped};

use crate::models::{BlogPost, Event, Partner, Speaker, TeamMember};
use crate::services::dates::format_long_date;
use crate::services::likes::LikeButton;
use crate::services::reading::{excerpt, EXCERPT_LENGTH};
use crate::services::share::ShareLinks;
use crate::services::slug::canonical_slug;
use crate::services::toc::{TableOfContents, SCROLL_OFFSET};

pub fn event_href(event: &Event) -> String {
    format!("/events/{}/{}", event.id, canonical_slug("event", event.id, &event.title))
}

pub fn speaker_href(speaker: &Speaker) -> String {
    format!("/speakers/{}/{}", speaker.id, canonical_slug("speaker", speaker.id, &speaker.name))
}

pub fn blog_href(post: &BlogPost) -> String {
    format!("/blog/{}/{}", post.id, canonical_slug("blog", post.id, &post.title))
}

/// Loading problems and empty lists share one look.
pub fn notice(text: &str) -> Markup {
    html! { div.notice { p { (text) } } }
}

pub fn error_notice(text: &str) -> Markup {
    html! { div.notice.notice-error role="alert" { p { (text) } } }
}

pub fn event_preview(event: &Event) -> Markup {
    html! {
        a.event-preview href=(event_href(event)) {
            img src=(event.image_url()) alt=(event.title) loading="lazy";
            div {
                h3 { (event.title) }
                p { (event.description) }
            }
        }
    }
}

/// Speaker card; `event_title` is shown when the speaker is tied to a known event.
pub fn speaker_card(speaker: &Speaker, event_title: Option<&str>) -> Markup {
    html! {
        a.speaker-card href=(speaker_href(speaker)) {
            img.avatar src=(speaker.image()) alt=(speaker.name) loading="lazy";
            h4 { (speaker.name) }
            @if !speaker.role().is_empty() {
                p.role { (speaker.role()) }
            }
            @if let Some(title) = event_title {
                p.event { (title) }
            }
        }
    }
}

pub fn blog_card(post: &BlogPost) -> Markup {
    html! {
        a.blog-card href=(blog_href(post)) {
            img src="/images/banner.jpg" alt=(post.title) loading="lazy";
            div.blog-card-body {
                p.meta {
                    span { (format_long_date(post.date_created.as_deref())) }
                    " · "
                    span { (post.author) }
                }
                h3 { (post.title) }
                p { (excerpt(&post.content, EXCERPT_LENGTH)) }
                span.read-more { "Read more →" }
            }
        }
    }
}

pub fn team_card(member: &TeamMember, photo_url: &str) -> Markup {
    html! {
        div.team-card {
            img.avatar src=(photo_url) alt=(member.full_name()) loading="lazy";
            h3 { (member.full_name()) }
            @if let Some(portfolio) = member.portfolio() {
                p.portfolio { (portfolio) }
            }
            @if member.is_convener() {
                span.badge { "Convener" }
            }
        }
    }
}

pub fn partner_logo(partner: &Partner) -> Markup {
    html! {
        figure.partner {
            img src=(partner.image_url()) alt=(partner.name) loading="lazy";
            figcaption { (partner.name) }
        }
    }
}

/// "Load more" link; rendered only when more items exist.
pub fn load_more(href: &str) -> Markup {
    html! {
        div.load-more {
            a.button href=(href) { "Load more" }
        }
    }
}

pub fn share_bar(links: &ShareLinks) -> Markup {
    html! {
        aside.share-bar {
            span.share-label { "Share" }
            a href=(links.twitter) target="_blank" rel="noopener" aria-label="Share on Twitter" { "X" }
            a href=(links.facebook) target="_blank" rel="noopener" aria-label="Share on Facebook" { "Facebook" }
            a href=(links.linkedin) target="_blank" rel="noopener" aria-label="Share on LinkedIn" { "LinkedIn" }
            a href=(links.whatsapp) target="_blank" rel="noopener" aria-label="Share on WhatsApp" { "WhatsApp" }
            button.copy-link type="button" data-url=(links.url) aria-label="Copy link" { "Copy link" }
            span.copy-confirmation hidden { "Link copied!" }
        }
        script { (PreEscaped(COPY_LINK_SCRIPT)) }
    }
}

const COPY_LINK_SCRIPT: &str = r#"
document.querySelectorAll('.copy-link').forEach(function (button) {
  button.addEventListener('click', function () {
    var note = button.parentElement.querySelector('.copy-confirmation');
    navigator.clipboard.writeText(button.dataset.url).then(function () {
      note.hidden = false;
      setTimeout(function () { note.hidden = true; }, 2000);
    }).catch(function (err) { console.error('Failed to copy:', err); });
  });
});
"#;

pub fn like_button(post_id: i64, button: &LikeButton) -> Markup {
    let label = if button.liked { "Liked" } else { "Like this post" };
    html! {
        form.like-button method="post" action=(format!("/blog/like/{post_id}")) {
            button type="submit" aria-label=(label) aria-pressed=(if button.liked { "true" } else { "false" }) disabled[!button.can_press()] {
                span.heart { (PreEscaped("&#9829;")) }
                span.like-count { (button.count) }
            }
        }
        script { (PreEscaped(LIKE_SCRIPT)) }
    }
}

const LIKE_SCRIPT: &str = r#"
document.querySelectorAll('form.like-button').forEach(function (form) {
  form.addEventListener('submit', function (event) {
    event.preventDefault();
    var button = form.querySelector('button');
    if (button.disabled) { return; }
    button.disabled = true;
    fetch(form.action, { method: 'POST', credentials: 'same-origin', headers: { 'Accept': 'application/json' } })
      .then(function (res) { return res.json().then(function (body) { return { ok: res.ok, body: body }; }); })
      .then(function (r) {
        if (r.ok && r.body.success) {
          form.querySelector('.like-count').textContent = r.body.likes;
          button.setAttribute('aria-pressed', 'true');
        } else {
          console.error('Error liking blog post:', r.body.message);
          button.disabled = false;
        }
      })
      .catch(function (err) { console.error('Error liking blog post:', err); button.disabled = false; });
  });
});
"#;

pub fn table_of_contents(toc: &TableOfContents) -> Markup {
    html! {
        @if !toc.is_empty() {
            nav.toc aria-label="Table of contents" {
                h4 { "Table of Contents" }
                ul {
                    @for entry in &toc.entries {
                        li class=(format!("toc-level-{}", entry.level)) {
                            a href=(format!("#{}", entry.id)) data-heading=(entry.id) { (entry.text) }
                        }
                    }
                }
            }
            script { (PreEscaped(toc_script())) }
        }
    }
}

fn toc_script() -> String {
    format!(
        r#"
(function () {{
  var links = Array.prototype.slice.call(document.querySelectorAll('.toc a[data-heading]'));
  function update() {{
    var position = window.scrollY + {SCROLL_OFFSET};
    var active = null;
    for (var i = links.length - 1; i >= 0; i--) {{
      var el = document.getElementById(links[i].dataset.heading);
      if (el && el.offsetTop <= position) {{ active = links[i]; break; }}
    }}
    links.forEach(function (l) {{ l.classList.toggle('active', l === active); }});
  }}
  window.addEventListener('scroll', update);
  update();
}})();
"#
    )
}
