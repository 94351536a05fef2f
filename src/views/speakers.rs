use maud::{html, Markup};

use crate::models::Speaker;
use crate::services::listing::{EventIndex, Filter, Page, SpeakerQuery, SpeakerSort};
use crate::views::components::{error_notice, load_more, notice, speaker_card};
use crate::views::layout::{breadcrumbs, hero, page, Crumb};
use crate::views::Loaded;

pub const NO_SPEAKERS: &str = "No speakers found";

pub struct SpeakersView {
    pub speakers: Page<Speaker>,
    pub query: SpeakerQuery,
    pub index: EventIndex,
    /// (id, title) of every known event, for the event filter.
    pub events: Vec<(i64, String)>,
}

/// Query string for the listing; `shown` is only carried by "load more".
pub fn listing_href(query: &SpeakerQuery, shown: Option<usize>) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();
    if let Filter::Only(event) = &query.event {
        pairs.push(("event", event.to_string()));
    }
    if let Filter::Only(year) = &query.year {
        pairs.push(("year", year.to_string()));
    }
    if query.sort != SpeakerSort::default() {
        pairs.push(("sort", query.sort.key().to_string()));
    }
    if let Some(shown) = shown {
        pairs.push(("shown", shown.to_string()));
    }

    match serde_urlencoded::to_string(&pairs) {
        Ok(qs) if !qs.is_empty() => format!("/speakers?{qs}"),
        _ => "/speakers".to_string(),
    }
}

pub fn list(view: Loaded<SpeakersView>) -> Markup {
    let content = html! {
        (hero("Meet the Minds Who Have Graced Our Stage", None, "/images/speakers/speaker-1-full.png"))
        section.container.speakers {
            @match view {
                Err(message) => (error_notice(message)),
                Ok(view) => {
                    (filters(&view))
                    @if view.speakers.is_empty() {
                        (notice(NO_SPEAKERS))
                    } @else {
                        div.grid {
                            @for speaker in &view.speakers.items {
                                (speaker_card(speaker, view.index.title(speaker.event_id)))
                            }
                        }
                        @if view.speakers.has_more() {
                            (load_more(&listing_href(&view.query, Some(view.speakers.next_shown()))))
                        }
                    }
                },
            }
        }
    };
    page("Speakers", content)
}

fn filters(view: &SpeakersView) -> Markup {
    let selected_event = match view.query.event {
        Filter::Only(id) => Some(id),
        Filter::All => None,
    };
    let selected_year = match view.query.year {
        Filter::Only(year) => Some(year),
        Filter::All => None,
    };

    html! {
        form.filters method="get" action="/speakers" {
            label {
                "Event "
                select name="event" {
                    option value="All" selected[selected_event.is_none()] { "All events" }
                    @for (id, title) in &view.events {
                        option value=(id) selected[selected_event == Some(*id)] { (title) }
                    }
                }
            }
            label {
                "Year "
                select name="year" {
                    option value="All" selected[selected_year.is_none()] { "All years" }
                    @for year in view.index.years() {
                        option value=(year) selected[selected_year == Some(year)] { (year) }
                    }
                }
            }
            label {
                "Sort "
                select name="sort" {
                    @for sort in SpeakerSort::ALL {
                        option value=(sort.key()) selected[view.query.sort == sort] { (sort.label()) }
                    }
                }
            }
            button type="submit" { "Apply" }
        }
    }
}

pub fn detail(speaker: &Speaker, event: Option<(i64, &str)>) -> Markup {
    let content = html! {
        section.speaker-hero style=(format!("background-image: url('{}')", speaker.image())) {
            div.container {
                (breadcrumbs(&[
                    Crumb { label: "Speakers", href: Some("/speakers") },
                    Crumb { label: &speaker.name, href: None },
                ]))
                img.avatar-large src=(speaker.image()) alt=(speaker.name);
                h1 { (speaker.name) }
                @if !speaker.role().is_empty() {
                    p.role { (speaker.role()) }
                }
            }
        }
        section.container.biography {
            h2 { "Biography" }
            @if speaker.biography().is_empty() {
                p { "Biography coming soon." }
            } @else {
                @for paragraph in speaker.biography().split("\n\n") {
                    p { (paragraph.trim()) }
                }
            }
            @if let Some((id, title)) = event {
                p.spoke-at {
                    "Spoke at "
                    a href=(format!("/events/{id}")) { (title) }
                }
            }
        }
    };
    page(&speaker.name, content)
}

pub fn unavailable(message: &str) -> Markup {
    let content = html! {
        section.container.unavailable {
            p.error { (message) }
            a href="/speakers" { "← Back to all speakers" }
        }
    };
    page("Speaker Not Available", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_href_keeps_filters() {
        let query = SpeakerQuery {
            event: Filter::Only(3),
            year: Filter::All,
            sort: SpeakerSort::Alphabetical,
        };
        assert_eq!(listing_href(&query, Some(16)), "/speakers?event=3&sort=alpha&shown=16");
        assert_eq!(listing_href(&SpeakerQuery::default(), None), "/speakers");
    }
}
