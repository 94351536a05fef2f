use maud::{html, Markup};

use crate::data::site::WHAT_IS_TEDX;
use crate::services::team::{team_photo_url, TeamGroup};
use crate::views::components::{error_notice, notice, team_card};
use crate::views::layout::{breadcrumbs, hero, page, Crumb};
use crate::views::Loaded;

pub const NO_TEAM_MEMBERS: &str = "No team members found.";

pub fn about() -> Markup {
    let content = html! {
        (hero("About TEDxMaitama", Some("Ideas worth spreading"), "/images/about.jpg"))
        section.container {
            (breadcrumbs(&[Crumb { label: "About", href: None }]))
            h2 { "What is TEDx?" }
            p { (WHAT_IS_TEDX) }
            h2 { "About TEDxMaitama" }
            p {
                "TEDxMaitama brings together thinkers, doers and storytellers from Abuja and beyond "
                "to share ideas that can change attitudes, lives and, ultimately, the world."
            }
            ul.about-links {
                li { a href="/about/team" { "Meet the team" } }
                li { a href="/about/volunteers" { "Our volunteers" } }
            }
        }
    };
    page("About", content)
}

pub fn team(groups: Loaded<Vec<TeamGroup>>, asset_origin: &str) -> Markup {
    let content = html! {
        (hero("Our Team", Some("The people behind TEDxMaitama"), "/images/about.jpg"))
        section.container.team {
            (breadcrumbs(&[
                Crumb { label: "About", href: Some("/about") },
                Crumb { label: "Team", href: None },
            ]))
            @match groups {
                Err(message) => (error_notice(message)),
                Ok(groups) if groups.is_empty() => (notice(NO_TEAM_MEMBERS)),
                Ok(groups) => {
                    @for group in &groups {
                        div.team-group {
                            h2 { (group.title) }
                            div.grid {
                                @for member in &group.members {
                                    (team_card(member, &team_photo_url(&member.photo, asset_origin)))
                                }
                            }
                        }
                    }
                },
            }
        }
    };
    page("Team", content)
}

pub fn volunteers() -> Markup {
    let content = html! {
        (hero("Our Volunteers", Some("TEDxMaitama runs on the energy of its volunteers"), "/images/about.jpg"))
        section.container {
            (breadcrumbs(&[
                Crumb { label: "About", href: Some("/about") },
                Crumb { label: "Volunteers", href: None },
            ]))
            p {
                "From registration desks to stage management, our volunteers make every event possible. "
                "Want to join them?"
            }
            a.button.button-primary href="/get-involved/volunteer" { "Volunteer with us" }
        }
    };
    page("Volunteers", content)
}
