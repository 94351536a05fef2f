//! Static pages and small one-off responses.

use maud::{html, Markup};

use crate::data::partners::headline_and_supporting;
use crate::data::site::{CONTACTS, CONTACT_ADDRESS, CONTACT_EMAIL, GET_INVOLVED, SOCIAL_LINKS};
use crate::views::components::{notice, partner_logo};
use crate::views::layout::{breadcrumbs, hero, page, Crumb};

pub const NO_TICKETS: &str = "No Event Tickets Available";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

pub fn partners() -> Markup {
    let content = html! {
        (hero("Our Partners", Some("The organisations that make TEDxMaitama possible"), "/images/banner.jpg"))
        section.container.partners {
            (breadcrumbs(&[Crumb { label: "Partners", href: None }]))
            @if let Some((headline, supporting)) = headline_and_supporting() {
                h2 { "Headline Sponsor" }
                div.headline-partner { (partner_logo(headline)) }
                @if !supporting.is_empty() {
                    h2 { "Supporting Partners" }
                    div.partner-grid {
                        @for partner in supporting { (partner_logo(partner)) }
                    }
                }
            }
            a.button href="/get-involved/partner" { "Become a partner" }
        }
    };
    page("Partners", content)
}

pub fn contact() -> Markup {
    let content = html! {
        (hero("Contact Us", Some("We would love to hear from you"), "/images/banner.jpg"))
        section.container.contact {
            (breadcrumbs(&[Crumb { label: "Contact", href: None }]))
            div.contact-grid {
                div {
                    h2 { "Get in touch" }
                    p { a href=(format!("mailto:{CONTACT_EMAIL}")) { (CONTACT_EMAIL) } }
                    p { (CONTACT_ADDRESS) }
                    ul.socials {
                        @for link in &SOCIAL_LINKS {
                            li { a href=(link.href) target="_blank" rel="noopener" { (link.label) } }
                        }
                    }
                }
                div {
                    h2 { "Contact persons" }
                    ul.contacts {
                        @for person in &CONTACTS {
                            li {
                                strong { (person.name) }
                                " · " (person.role) br;
                                a href=(format!("tel:{}", person.phone.replace(' ', ""))) { (person.phone) }
                            }
                        }
                    }
                }
            }
        }
    };
    page("Contact", content)
}

pub fn get_involved() -> Markup {
    let content = html! {
        (hero("Get Involved", Some("Be part of ideas worth spreading"), "/images/banner.jpg"))
        section.container.get-involved {
            (breadcrumbs(&[Crumb { label: "Get Involved", href: None }]))
            div.grid {
                @for option in &GET_INVOLVED {
                    a.involvement-card href=(option.href) {
                        h3 { (option.title) }
                        p { (option.description) }
                    }
                }
            }
        }
    };
    page("Get Involved", content)
}

/// The three call-to-action subpages under `/get-involved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Involvement {
    Volunteer,
    Partner,
    Speak,
}

impl Involvement {
    fn title(self) -> &'static str {
        match self {
            Involvement::Volunteer => "Volunteer With Us",
            Involvement::Partner => "Partner With Us",
            Involvement::Speak => "Speak at TEDxMaitama",
        }
    }

    fn pitch(self) -> &'static str {
        match self {
            Involvement::Volunteer => {
                "Volunteers are the heart of every TEDx event. Join the crew and help with \
                 logistics, hospitality, media and speaker care."
            }
            Involvement::Partner => {
                "Partnering with TEDxMaitama connects your organisation with a community of \
                 curious, engaged people and the ideas that move them."
            }
            Involvement::Speak => {
                "Do you have an idea worth spreading? We are always looking for speakers with \
                 fresh perspectives and compelling stories."
            }
        }
    }

    fn subject(self) -> &'static str {
        match self {
            Involvement::Volunteer => "Volunteer application",
            Involvement::Partner => "Partnership enquiry",
            Involvement::Speak => "Speaker nomination",
        }
    }
}

pub fn involvement(kind: Involvement) -> Markup {
    let mailto = format!(
        "mailto:{CONTACT_EMAIL}?{}",
        serde_urlencoded::to_string([("subject", kind.subject())]).unwrap_or_default()
    );
    let content = html! {
        (hero(kind.title(), None, "/images/banner.jpg"))
        section.container {
            (breadcrumbs(&[
                Crumb { label: "Get Involved", href: Some("/get-involved") },
                Crumb { label: kind.title(), href: None },
            ]))
            p { (kind.pitch()) }
            a.button.button-primary href=(mailto) { "Get in touch" }
        }
    };
    page(kind.title(), content)
}

pub fn tickets() -> Markup {
    let content = html! {
        section.container.tickets {
            (breadcrumbs(&[Crumb { label: "Tickets", href: None }]))
            h1 { "Tickets" }
            (notice(NO_TICKETS))
            p { "Ticket sales have not opened yet. Follow our socials to be the first to know." }
            a.button href="/events" { "Browse events" }
        }
    };
    page("Tickets", content)
}

/// Outcome of a newsletter signup; `message` comes from the API when it sent one.
pub fn newsletter_result(success: bool, message: &str) -> Markup {
    let content = html! {
        section.container.newsletter-result {
            h1 { @if success { "Thanks for subscribing!" } @else { "Subscription failed" } }
            div.notice.notice-error[!success] role="status" { p { (message) } }
            a href="/" { "← Back to home" }
        }
    };
    page("Newsletter", content)
}

pub fn not_found() -> Markup {
    let content = html! {
        section.container.not-found {
            h1 { "404" }
            p { "The page you are looking for does not exist." }
            a.button href="/" { "Go home" }
        }
    };
    page("Page Not Found", content)
}
