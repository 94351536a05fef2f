use axum::{extract::State, response::Response, routing::get, Router};
use std::sync::Arc;

use crate::services::team::group_team;
use crate::views::{self, render};
use crate::AppState;

pub const TEAM_FAILED: &str = "Failed to load team members. Please try again later.";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/about", get(about))
        .route("/about/team", get(team))
        .route("/about/volunteers", get(volunteers))
}

pub async fn about() -> Response {
    render(views::about::about())
}

pub async fn team(State(state): State<Arc<AppState>>) -> Response {
    let groups = state
        .api
        .get_all_team_members()
        .await
        .map(group_team)
        .map_err(|_| TEAM_FAILED);

    render(views::about::team(groups, state.config.api.asset_origin()))
}

pub async fn volunteers() -> Response {
    render(views::about::volunteers())
}
