pub mod about;
pub mod blog;
pub mod events;
pub mod home;
pub mod newsletter;
pub mod pages;
pub mod speakers;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(home::routes())
        .merge(events::routes())
        .merge(speakers::routes())
        .merge(blog::routes())
        .merge(about::routes())
        .merge(pages::routes())
        .merge(newsletter::routes())
}

/// `/{kind}/{id}` and `/{kind}/{id}/{slug}` share one handler.
#[derive(Debug, Deserialize)]
pub struct DetailPath {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
}

impl DetailPath {
    /// Positive numeric id, or `None` for anything else.
    pub fn id(&self) -> Option<i64> {
        self.id.trim().parse::<i64>().ok().filter(|id| *id > 0)
    }

    /// Permanent redirect when the requested slug is not the canonical one.
    /// A bare `/{kind}/{id}` is served as is.
    pub fn redirect_if_stale(&self, canonical_href: &str) -> Option<Response> {
        let requested = self.slug.as_deref()?;
        if canonical_href.rsplit('/').next() == Some(requested) {
            None
        } else {
            Some(Redirect::permanent(canonical_href).into_response())
        }
    }
}

/// `shown` query value; junk falls back to the first page.
pub fn parse_shown(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse().ok())
}

/// Status for a detail page whose main resource failed to load.
pub fn failure_status(err: &ApiError) -> StatusCode {
    match err {
        ApiError::Status { status: 404, .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    }
}
