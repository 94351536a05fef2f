use axum::{extract::State, response::Response, routing::get, Router};
use chrono::Utc;
use futures::join;
use std::sync::Arc;

use crate::services::status::partition_events;
use crate::views::{self, home::HomeView, render};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(home))
}

/// A failed resource only empties its own section.
pub async fn home(State(state): State<Arc<AppState>>) -> Response {
    let (speakers, events) = join!(state.api.get_all_speakers(), state.api.get_all_events());

    let upcoming = events
        .map(|events| partition_events(events, Utc::now()).0)
        .unwrap_or_default();

    let view = HomeView {
        upcoming,
        speakers: speakers.unwrap_or_default(),
    };
    render(views::home::home(&view))
}
