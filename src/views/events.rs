use maud::{html, Markup};

use crate::models::{Event, Speaker};
use crate::services::dates::{format_time, format_weekday_date};
use crate::services::listing::Page;
use crate::services::status::EventStatus;
use crate::views::components::{error_notice, event_preview, load_more, notice, speaker_card};
use crate::views::layout::{breadcrumbs, hero, page, Crumb};
use crate::views::Loaded;

pub const NO_EVENTS: &str = "No events available";
pub const NO_EVENT_SPEAKERS: &str = "Speakers for this event will be announced soon. Check back later.";

pub struct EventsView {
    pub upcoming: Vec<Event>,
    pub past: Page<Event>,
}

pub fn list(view: Loaded<EventsView>) -> Markup {
    let content = html! {
        (hero("TEDx Maitama", Some("Ideas worth spreading"), "/images/events/event-1.png"))
        @match view {
            Err(message) => section.container { (error_notice(message)) },
            Ok(view) if view.upcoming.is_empty() && view.past.is_empty() => {
                section.container { (notice(NO_EVENTS)) }
            },
            Ok(view) => {
                section.container.upcoming-events {
                    h2 { "Upcoming Events" }
                    @if view.upcoming.is_empty() {
                        (notice("No upcoming events right now. Stay tuned!"))
                    } @else {
                        div.grid {
                            @for event in &view.upcoming { (event_preview(event)) }
                        }
                    }
                }
                section.container.past-events {
                    h2 { "Past Events" }
                    @if view.past.is_empty() {
                        (notice("No past events yet."))
                    } @else {
                        div.grid {
                            @for event in &view.past.items { (event_preview(event)) }
                        }
                        @if view.past.has_more() {
                            (load_more(&format!("/events?shown={}", view.past.next_shown())))
                        }
                    }
                }
            },
        }
    };
    page("Events", content)
}

pub fn detail(event: &Event, status: EventStatus, speakers: Loaded<Vec<Speaker>>) -> Markup {
    let date = event.best_date();
    let upcoming = status == EventStatus::Upcoming;

    let content = html! {
        section.hero style=(format!("background-image: url('{}')", event.image_url())) {
            div.hero-overlay {
                div.badges {
                    @if let Some(category) = event.category() {
                        span.badge.badge-category { (category) }
                    }
                    span class=(status.css_class()) { (status.label()) }
                }
                h1 { (event.title) }
                p.hero-subtitle { (event.description) }
            }
        }
        section.container {
            (breadcrumbs(&[
                Crumb { label: "Events", href: Some("/events") },
                Crumb { label: &event.title, href: None },
            ]))
            div.event-details {
                div {
                    h2 { "Event Overview" }
                    p {
                        @if event.description.trim().is_empty() {
                            "Join us for an inspiring experience with thought leaders and changemakers."
                        } @else {
                            (event.description)
                        }
                    }
                    dl.facts {
                        dt { "Date & Time" }
                        dd {
                            (format_weekday_date(date))
                            @if let Some(time) = format_time(event.start_time.as_deref()) {
                                br; (time)
                            }
                        }
                        dt { "Venue" }
                        dd {
                            @if event.location.trim().is_empty() { "Venue will be announced soon" } @else { (event.location) }
                        }
                        dt { "Category" }
                        dd { (event.category().unwrap_or("General")) }
                        dt { "Status" }
                        dd { (status.label()) }
                    }
                }
                aside.attend {
                    h3 { "Attend this event" }
                    @if upcoming {
                        p { "Secure your seat and be part of an unforgettable experience." }
                        a.button.button-primary href=(format!("/tickets/{}", event.id)) { "Get Tickets" }
                    } @else {
                        p { "This event has ended. Stay tuned for more TEDxMaitama experiences." }
                        a.button href="/events" { "Browse Other Events" }
                    }
                }
            }
        }
        section.container.event-speakers {
            p.eyebrow { "Event Speakers" }
            h2 { "Meet the voices behind " (event.category().unwrap_or("this event")) }
            @match speakers {
                Err(message) => (error_notice(message)),
                Ok(speakers) if speakers.is_empty() => (notice(NO_EVENT_SPEAKERS)),
                Ok(speakers) => div.grid {
                    @for speaker in &speakers { (speaker_card(speaker, None)) }
                },
            }
        }
    };
    page(&event.title, content)
}

/// Event could not be shown: bad id or failed fetch.
pub fn unavailable(message: &str) -> Markup {
    let content = html! {
        section.container.unavailable {
            h1 { "Event Not Available" }
            p { (message) }
            a href="/events" { "← Back to all events" }
        }
    };
    page("Event Not Available", content)
}
