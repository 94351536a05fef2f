use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use futures::join;
use serde::Deserialize;
use std::sync::Arc;

use crate::controllers::{failure_status, parse_shown, DetailPath};
use crate::services::listing::{filter_speakers, EventIndex, Filter, Page, SpeakerQuery, SpeakerSort, SPEAKER_PAGE_SIZE};
use crate::views::{self, components::speaker_href, render, render_with_status, speakers::SpeakersView};
use crate::AppState;

pub const SPEAKERS_FAILED: &str = "Failed to load speakers. Please try again later.";
pub const SPEAKER_FAILED: &str = "Failed to load speaker. Please try again later.";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/speakers", get(list_speakers))
        .route("/speakers/{id}", get(speaker_detail))
        .route("/speakers/{id}/{slug}", get(speaker_detail))
}

/// Raw query values; anything unparsable means "no filter".
#[derive(Debug, Default, Deserialize)]
pub struct SpeakersParams {
    pub event: Option<String>,
    pub year: Option<String>,
    pub sort: Option<String>,
    pub shown: Option<String>,
}

impl SpeakersParams {
    pub fn query(&self) -> SpeakerQuery {
        SpeakerQuery {
            event: Filter::parse(self.event.as_deref()),
            year: Filter::parse(self.year.as_deref()),
            sort: SpeakerSort::parse(self.sort.as_deref()),
        }
    }
}

pub async fn list_speakers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SpeakersParams>,
) -> Response {
    let (speakers, events) = join!(state.api.get_all_speakers(), state.api.get_all_events());

    // Without events the list still renders; only event names and years go missing
    let events = events.unwrap_or_default();
    let index = EventIndex::new(&events);
    let query = params.query();

    let view = speakers
        .map(|speakers| {
            let matching = filter_speakers(speakers, &query, &index);
            SpeakersView {
                speakers: Page::slice(matching, parse_shown(params.shown.as_deref()), SPEAKER_PAGE_SIZE),
                events: events.iter().map(|e| (e.id, e.title.clone())).collect(),
                query,
                index,
            }
        })
        .map_err(|_| SPEAKERS_FAILED);

    render(views::speakers::list(view))
}

pub async fn speaker_detail(
    State(state): State<Arc<AppState>>,
    Path(path): Path<DetailPath>,
) -> Response {
    let Some(id) = path.id() else {
        return render_with_status(StatusCode::NOT_FOUND, views::speakers::unavailable(SPEAKER_FAILED));
    };

    let (speaker, events) = join!(state.api.get_speaker_by_id(id), state.api.get_all_events());

    let speaker = match speaker {
        Ok(speaker) => speaker,
        Err(e) => {
            return render_with_status(failure_status(&e), views::speakers::unavailable(SPEAKER_FAILED));
        }
    };
    if let Some(redirect) = path.redirect_if_stale(&speaker_href(&speaker)) {
        return redirect;
    }

    let events = events.unwrap_or_default();
    let event = speaker
        .event_id
        .and_then(|event_id| events.iter().find(|e| e.id == event_id))
        .map(|e| (e.id, e.title.as_str()));

    render(views::speakers::detail(&speaker, event))
}
