use maud::{html, Markup};

use crate::data::partners::PARTNERS;
use crate::data::site::{GET_INVOLVED, WHAT_IS_TEDX};
use crate::models::{Event, Speaker};
use crate::views::components::{event_preview, notice, partner_logo, speaker_card};
use crate::views::layout::page;

pub const UPCOMING_LIMIT: usize = 3;
pub const SPOTLIGHT_LIMIT: usize = 4;

/// Home page sections. A section whose fetch failed arrives empty.
pub struct HomeView {
    pub upcoming: Vec<Event>,
    pub speakers: Vec<Speaker>,
}

pub fn home(view: &HomeView) -> Markup {
    let content = html! {
        section.landing {
            h1 { "Ideas " span.accent { "Worth" } " Spreading" }
            p { "Join us for TEDxMaitama, where local voices share ideas that matter." }
            a.button.button-primary href="/events" { "Explore Events" }
        }

        section.container.what-is-tedx {
            h2 { "What is TEDx?" }
            p { (WHAT_IS_TEDX) }
            a href="/about" { "Learn more about us →" }
        }

        section.container.upcoming-events {
            h2 { "Upcoming Events" }
            @if view.upcoming.is_empty() {
                (notice("No upcoming events right now. Stay tuned!"))
            } @else {
                div.grid {
                    @for event in view.upcoming.iter().take(UPCOMING_LIMIT) {
                        (event_preview(event))
                    }
                }
            }
        }

        section.container.speaker-spotlight {
            h2 { "Speaker Spotlight" }
            @if view.speakers.is_empty() {
                (notice("Speakers will be announced soon."))
            } @else {
                div.grid {
                    @for speaker in view.speakers.iter().take(SPOTLIGHT_LIMIT) {
                        (speaker_card(speaker, None))
                    }
                }
                a href="/speakers" { "View all speakers →" }
            }
        }

        section.container.get-involved {
            h2 { "Get Involved" }
            div.grid {
                @for option in &GET_INVOLVED {
                    a.involvement-card href=(option.href) {
                        h3 { (option.title) }
                        p { (option.description) }
                    }
                }
            }
        }

        section.container.partners {
            h2 { "Our Partners" }
            div.partner-grid {
                @for partner in &PARTNERS { (partner_logo(partner)) }
            }
        }
    };
    page("", content)
}
