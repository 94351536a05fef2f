use axum::{http::StatusCode, response::Response, routing::get, Router};
use std::sync::Arc;

use crate::views::{
    pages::{self, Involvement},
    render, render_with_status,
};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/partners", get(partners))
        .route("/contact", get(contact))
        .route("/get-involved", get(get_involved))
        .route("/get-involved/volunteer", get(|| involvement(Involvement::Volunteer)))
        .route("/get-involved/partner", get(|| involvement(Involvement::Partner)))
        .route("/get-involved/speak", get(|| involvement(Involvement::Speak)))
        .route("/tickets", get(tickets))
        .route("/tickets/{id}", get(tickets))
}

pub async fn partners() -> Response {
    render(pages::partners())
}

pub async fn contact() -> Response {
    render(pages::contact())
}

pub async fn get_involved() -> Response {
    render(pages::get_involved())
}

async fn involvement(kind: Involvement) -> Response {
    render(pages::involvement(kind))
}

/// Ticket sales are not open; every event shows the same notice.
pub async fn tickets() -> Response {
    render(pages::tickets())
}

pub async fn not_found() -> Response {
    render_with_status(StatusCode::NOT_FOUND, pages::not_found())
}
