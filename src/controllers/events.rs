use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use chrono::Utc;
use futures::join;
use serde::Deserialize;
use std::sync::Arc;

use crate::controllers::{failure_status, parse_shown, DetailPath};
use crate::services::listing::{Page, EVENT_PAGE_SIZE};
use crate::services::status::{classify, partition_events};
use crate::views::{self, components::event_href, events::EventsView, render, render_with_status};
use crate::AppState;

pub const EVENTS_FAILED: &str = "Failed to load events. Please try again later.";
pub const INVALID_EVENT_ID: &str = "Invalid event id";
pub const EVENT_FAILED: &str = "Unable to load this event. Please try again later.";
pub const EVENT_SPEAKERS_FAILED: &str = "Failed to load speakers. Please try again later.";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/{id}", get(event_detail))
        .route("/events/{id}/{slug}", get(event_detail))
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub shown: Option<String>,
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventsQuery>,
) -> Response {
    let view = state
        .api
        .get_all_events()
        .await
        .map(|events| {
            let (upcoming, past) = partition_events(events, Utc::now());
            EventsView {
                upcoming,
                past: Page::slice(past, parse_shown(params.shown.as_deref()), EVENT_PAGE_SIZE),
            }
        })
        .map_err(|_| EVENTS_FAILED);

    render(views::events::list(view))
}

pub async fn event_detail(
    State(state): State<Arc<AppState>>,
    Path(path): Path<DetailPath>,
) -> Response {
    let Some(id) = path.id() else {
        return render_with_status(StatusCode::NOT_FOUND, views::events::unavailable(INVALID_EVENT_ID));
    };

    let (event, speakers) = join!(state.api.get_event_by_id(id), state.api.get_all_speakers());

    let event = match event {
        Ok(event) => event,
        Err(e) => {
            return render_with_status(failure_status(&e), views::events::unavailable(EVENT_FAILED));
        }
    };
    if let Some(redirect) = path.redirect_if_stale(&event_href(&event)) {
        return redirect;
    }

    let speakers = speakers
        .map(|all| all.into_iter().filter(|s| s.event_id == Some(id)).collect::<Vec<_>>())
        .map_err(|_| EVENT_SPEAKERS_FAILED);
    let status = classify(&event, Utc::now());

    render(views::events::detail(&event, status, speakers))
}
