use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use futures::join;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::controllers::{failure_status, parse_shown, DetailPath};
use crate::middleware::LikedPosts;
use crate::services::blog::{neighbours, related, RELATED_LIMIT};
use crate::services::likes::LikeButton;
use crate::services::listing::{filter_posts_by_category, Filter, Page, BLOG_PAGE_SIZE};
use crate::services::reading::reading_time_minutes;
use crate::services::share::ShareLinks;
use crate::services::toc::TableOfContents;
use crate::views::{
    self,
    blog::{BlogDetailView, BlogListView},
    components::blog_href,
    render, render_with_status,
};
use crate::AppState;

pub const POSTS_FAILED: &str = "Failed to load blog posts. Please try again later.";
pub const POST_FAILED: &str = "Failed to load blog post. Please try again later.";
pub const LIKE_FAILED: &str = "Failed to like blog post. Please try again later.";
pub const ALREADY_LIKED: &str = "You have already liked this post.";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/blog", get(list_posts))
        .route("/blog/{id}", get(post_detail))
        .route("/blog/like/{id}", post(like_post))
        .route("/blog/{id}/{slug}", get(post_detail))
}

#[derive(Debug, Deserialize)]
pub struct BlogParams {
    pub category: Option<String>,
    pub shown: Option<String>,
}

pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BlogParams>,
) -> Response {
    let (posts, categories) = join!(state.api.get_all_blog_posts(), state.api.get_all_blog_categories());

    // Category failure only hides the category links
    let categories: Vec<String> = categories
        .map(|all| all.into_iter().map(|c| c.name).filter(|n| !n.trim().is_empty()).collect())
        .unwrap_or_default();
    let selected: Filter<String> = Filter::parse(params.category.as_deref());

    let view = posts
        .map(|posts| {
            let matching = filter_posts_by_category(posts, &selected);
            BlogListView {
                posts: Page::slice(matching, parse_shown(params.shown.as_deref()), BLOG_PAGE_SIZE),
                categories,
                selected: selected.clone(),
            }
        })
        .map_err(|_| POSTS_FAILED);

    render(views::blog::list(view))
}

pub async fn post_detail(
    State(state): State<Arc<AppState>>,
    Path(path): Path<DetailPath>,
    liked: LikedPosts,
) -> Response {
    let Some(id) = path.id() else {
        return render_with_status(StatusCode::NOT_FOUND, views::blog::unavailable(POST_FAILED));
    };

    let (post, all_posts) = join!(state.api.get_blog_post_by_id(id), state.api.get_all_blog_posts());

    let post = match post {
        Ok(post) => post,
        Err(e) => {
            return render_with_status(failure_status(&e), views::blog::unavailable(POST_FAILED));
        }
    };
    let href = blog_href(&post);
    if let Some(redirect) = path.redirect_if_stale(&href) {
        return redirect;
    }

    // Counting the view must not hold up the page
    let api = state.api.clone();
    tokio::spawn(async move { api.increment_blog_views(id).await });

    let all_posts = all_posts.unwrap_or_default();
    let (previous, next) = neighbours(&all_posts, id);

    let view = BlogDetailView {
        post: &post,
        toc: TableOfContents::build(&post.content),
        reading_minutes: reading_time_minutes(&post.content),
        share: ShareLinks::new(&format!("{}{}", state.config.site.url, href), &post.title),
        like: LikeButton::new(post.likes, liked.contains(id)),
        previous,
        next,
        related: related(&all_posts, &post, RELATED_LIMIT),
    };

    render(views::blog::detail(&view))
}

/// Records one like per post per browser session.
///
/// The page script asks for JSON. A plain form post (no script) is sent back
/// to the post instead.
pub async fn like_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    liked: LikedPosts,
    headers: HeaderMap,
) -> Response {
    let Some(id) = id.trim().parse::<i64>().ok().filter(|id| *id > 0) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": POST_FAILED })),
        )
            .into_response();
    };
    let wants_json = accepts_json(&headers);
    let back = format!("/blog/{id}");

    // Only the liked flag matters here; the count comes from the server
    let mut button = LikeButton::new(0, liked.contains(id));
    if !button.press() {
        if !wants_json {
            return Redirect::to(&back).into_response();
        }
        return (
            StatusCode::CONFLICT,
            Json(json!({ "success": false, "liked": true, "message": ALREADY_LIKED })),
        )
            .into_response();
    }

    let outcome = state.api.increment_blog_likes(id).await.map(|update| update.likes);
    button.resolve(&outcome);

    match outcome {
        Ok(_) => {
            let cookie = [(header::SET_COOKIE, liked.set_cookie_with(id))];
            if wants_json {
                (
                    cookie,
                    Json(json!({ "success": true, "liked": button.liked, "likes": button.count })),
                )
                    .into_response()
            } else {
                (cookie, Redirect::to(&back)).into_response()
            }
        }
        Err(_) if !wants_json => Redirect::to(&back).into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "success": false, "message": e.user_message().unwrap_or(LIKE_FAILED) })),
        )
            .into_response(),
    }
}

fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.contains("application/json"))
}
