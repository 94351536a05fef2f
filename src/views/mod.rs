//! HTML templates. Controllers fetch and derive; everything here is rendering.

pub mod about;
pub mod blog;
pub mod components;
pub mod events;
pub mod home;
pub mod layout;
pub mod pages;
pub mod speakers;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::Markup;

/// What a section shows: its data, or the generic failure message of the page.
pub type Loaded<T> = Result<T, &'static str>;

pub fn render(markup: Markup) -> Response {
    Html(markup.into_string()).into_response()
}

pub fn render_with_status(status: StatusCode, markup: Markup) -> Response {
    (status, Html(markup.into_string())).into_response()
}
