mod common;

use axum::http::{header, StatusCode};
use common::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_get(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn blog_post(id: i64, title: &str, category: &str, likes: u64) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "content": "<h2>Intro</h2><p>Hello world</p><h3>Detail</h3><p>More words</p>",
        "author": "Ada",
        "category": category,
        "likes": likes,
        "views": 3,
        "date_created": "2024-03-01T10:00:00Z"
    })
}

#[tokio::test]
async fn health_check() {
    let server = MockServer::start().await;
    let response = send(&site(&server), get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn unknown_route_renders_not_found() {
    let server = MockServer::start().await;
    let response = send(&site(&server), get("/no/such/page")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("does not exist"));
}

#[tokio::test]
async fn empty_events_page() {
    let server = MockServer::start().await;
    mount_get(&server, "/public/events/get-all", envelope(json!([]))).await;

    let response = send(&site(&server), get("/events")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("No events available"));
    assert!(!html.contains("Load more"));
}

#[tokio::test]
async fn events_failure_shows_generic_error_and_no_stale_data() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/public/events/get-all",
        envelope(json!([{ "id": 1, "title": "Alpha Summit", "is_past": true }])),
    )
    .await;
    let app = site(&server);

    let html = body_text(send(&app, get("/events")).await).await;
    assert!(html.contains("Alpha Summit"));

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/public/events/get-all"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let html = body_text(send(&app, get("/events")).await).await;
    assert!(html.contains("Failed to load events. Please try again later."));
    assert!(!html.contains("Alpha Summit"));
}

#[tokio::test]
async fn past_events_paginate_with_load_more() {
    let server = MockServer::start().await;
    let events: Vec<_> = (1..=8)
        .map(|id| json!({ "id": id, "title": format!("Past Event {id}"), "is_past": true }))
        .collect();
    mount_get(&server, "/public/events/get-all", envelope(json!(events))).await;
    let app = site(&server);

    let html = body_text(send(&app, get("/events")).await).await;
    assert!(html.contains("Past Event 6"));
    assert!(!html.contains("Past Event 7"));
    assert!(html.contains("/events?shown=12"));

    let html = body_text(send(&app, get("/events?shown=12")).await).await;
    assert!(html.contains("Past Event 8"));
    assert!(!html.contains("Load more"));
}

#[tokio::test]
async fn stale_event_slug_redirects_to_canonical_url() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/public/events/get-one/7",
        envelope(json!({ "id": 7, "title": "TEDxMaitama 2024", "is_upcoming": true })),
    )
    .await;
    mount_get(&server, "/public/speakers/get-all", envelope(json!([]))).await;
    let app = site(&server);

    let response = send(&app, get("/events/7/old-name")).await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/events/7/tedxmaitama-2024");

    let response = send(&app, get("/events/7/tedxmaitama-2024")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Upcoming"));
    assert!(html.contains("/tickets/7"));
}

#[tokio::test]
async fn invalid_event_id_is_not_found() {
    let server = MockServer::start().await;
    let response = send(&site(&server), get("/events/abc")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Invalid event id"));
}

#[tokio::test]
async fn speakers_filtered_by_event_keep_fetch_order() {
    let server = MockServer::start().await;
    let speakers: Vec<_> = (1..=10)
        .map(|id| {
            let event_id = if [2, 5, 9].contains(&id) { 2 } else { 1 };
            json!({ "id": id, "name": format!("Speaker {id:02}"), "event_id": event_id })
        })
        .collect();
    mount_get(&server, "/public/speakers/get-all", envelope(json!(speakers))).await;
    mount_get(
        &server,
        "/public/events/get-all",
        envelope(json!([
            { "id": 1, "title": "First", "start_time": "2023-05-01T10:00:00Z" },
            { "id": 2, "title": "Second", "start_time": "2024-05-01T10:00:00Z" }
        ])),
    )
    .await;

    let html = body_text(send(&site(&server), get("/speakers?event=2")).await).await;
    let positions: Vec<usize> = ["Speaker 02", "Speaker 05", "Speaker 09"]
        .iter()
        .map(|name| html.find(name).expect("speaker listed"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(!html.contains("Speaker 01"));
    assert!(!html.contains("Speaker 10"));
}

#[tokio::test]
async fn speakers_without_matches_show_empty_state() {
    let server = MockServer::start().await;
    mount_get(&server, "/public/speakers/get-all", envelope(json!([{ "id": 1, "name": "Solo" }]))).await;
    mount_get(&server, "/public/events/get-all", envelope(json!([]))).await;

    let html = body_text(send(&site(&server), get("/speakers?event=99")).await).await;
    assert!(html.contains("No speakers found"));
}

#[tokio::test]
async fn like_flow_posts_once_and_locks_button() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/public/blog/increment-likes/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "likes": 11 })))
        .expect(1)
        .mount(&server)
        .await;
    mount_get(&server, "/public/blog/get-one/5", envelope(blog_post(5, "Ideas", "Tech", 11))).await;
    mount_get(&server, "/public/blog/get-all", envelope(json!([blog_post(5, "Ideas", "Tech", 11)]))).await;
    let app = site(&server);

    let response = send(&app, post_json("/blog/like/5", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(cookie.starts_with("liked_posts=5;"));
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["likes"], 11);

    let response = send(&app, post_json("/blog/like/5", Some("liked_posts=5"))).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let html = body_text(send(&app, get_with_cookie("/blog/5", "liked_posts=5")).await).await;
    assert!(html.contains(r#"aria-label="Liked" aria-pressed="true" disabled"#));
    assert!(html.contains(r#"<span class="like-count">11</span>"#));
}

#[tokio::test]
async fn like_without_script_redirects_back_to_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/public/blog/increment-likes/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "likes": 3 })))
        .expect(1)
        .mount(&server)
        .await;
    let app = site(&server);

    let response = send(&app, post("/blog/like/5", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/blog/5");
    assert!(response.headers().get(header::SET_COOKIE).is_some());

    let response = send(&app, post("/blog/like/5", Some("liked_posts=5"))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn post_titled_like_opens_normally() {
    let server = MockServer::start().await;
    mount_get(&server, "/public/blog/get-one/5", envelope(blog_post(5, "Like", "Tech", 0))).await;
    mount_get(&server, "/public/blog/get-all", envelope(json!([blog_post(5, "Like", "Tech", 0)]))).await;
    let app = site(&server);

    let response = send(&app, get("/blog/5/old-title")).await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/blog/5/like");

    let response = send(&app, get("/blog/5/like")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h1>Like</h1>"));
    assert!(html.contains(r#"action="/blog/like/5""#));
}

#[tokio::test]
async fn failed_like_keeps_cookie_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/public/blog/increment-likes/5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let response = send(&site(&server), post_json("/blog/like/5", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(body_json(response).await["success"], false);
}

#[tokio::test]
async fn blog_detail_has_toc_reading_time_and_share_links() {
    let server = MockServer::start().await;
    mount_get(&server, "/public/blog/get-one/5", envelope(blog_post(5, "Ideas", "Tech", 2))).await;
    mount_get(
        &server,
        "/public/blog/get-all",
        envelope(json!([
            blog_post(4, "Older", "Tech", 0),
            blog_post(5, "Ideas", "Tech", 2),
            blog_post(6, "Newer", "Culture", 0)
        ])),
    )
    .await;

    let html = body_text(send(&site(&server), get("/blog/5/ideas")).await).await;
    assert!(html.contains(r#"<h2 id="heading-0">Intro</h2>"#));
    assert!(html.contains(r##"href="#heading-1""##));
    assert!(html.contains("1 min read"));
    assert!(html.contains("https://twitter.com/intent/tweet?"));
    assert!(html.contains("/blog/4/older"));
    assert!(html.contains("/blog/6/newer"));
}

#[tokio::test]
async fn blog_list_filters_by_category_and_survives_category_failure() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/public/blog/get-all",
        envelope(json!([
            blog_post(1, "Robots", "Tech", 0),
            blog_post(2, "Poetry", "Culture", 0)
        ])),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/public/blog-categories/get-all"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let html = body_text(send(&site(&server), get("/blog?category=Culture")).await).await;
    assert!(html.contains("Poetry"));
    assert!(!html.contains("Robots"));
    assert!(html.contains(">All</a>"));
}

#[tokio::test]
async fn team_page_groups_members() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/public/team/get-all",
        envelope(json!([
            { "team_id": 1, "first_name": "Grace", "last_name": "Obi", "member_type": "Executive Team" },
            { "team_id": 2, "first_name": "Musa", "last_name": "Bello", "member_type": "Convener" }
        ])),
    )
    .await;

    let html = body_text(send(&site(&server), get("/about/team")).await).await;
    let convener = html.find("Musa Bello").unwrap();
    let member = html.find("Grace Obi").unwrap();
    assert!(html.contains("Executive Team"));
    assert!(convener < member);
}

#[tokio::test]
async fn newsletter_rejects_invalid_email() {
    let server = MockServer::start().await;
    let response = send(&site(&server), post_form("/newsletter", "email=not-an-email")).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("Please enter a valid email address."));
}

#[tokio::test]
async fn newsletter_shows_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/public/newsletter/subscribe"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "message": "Welcome aboard" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = send(&site(&server), post_form("/newsletter", "email=ada%40example.com")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Welcome aboard"));
}

#[tokio::test]
async fn tickets_are_not_on_sale() {
    let server = MockServer::start().await;
    let html = body_text(send(&site(&server), get("/tickets/3")).await).await;
    assert!(html.contains("No Event Tickets Available"));
}

#[tokio::test]
async fn home_section_failure_only_empties_that_section() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/public/speakers/get-all"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let events: Vec<_> = (1..=4)
        .map(|id| json!({ "id": id, "title": format!("Gala {id}"), "is_upcoming": true }))
        .collect();
    mount_get(&server, "/public/events/get-all", envelope(json!(events))).await;

    let response = send(&site(&server), get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Gala 1"));
    assert!(html.contains("Gala 3"));
    assert!(!html.contains("Gala 4"));
    assert!(html.contains("Speakers will be announced soon."));
}

#[tokio::test]
async fn home_spotlight_shows_four_speakers() {
    let server = MockServer::start().await;
    let speakers: Vec<_> = (1..=5)
        .map(|id| json!({ "id": id, "name": format!("Guest {id}") }))
        .collect();
    mount_get(&server, "/public/speakers/get-all", envelope(json!(speakers))).await;
    Mock::given(method("GET"))
        .and(path("/public/events/get-all"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let html = body_text(send(&site(&server), get("/")).await).await;
    assert!(html.contains("Guest 4"));
    assert!(!html.contains("Guest 5"));
    assert!(html.contains("No upcoming events right now. Stay tuned!"));
}

#[tokio::test]
async fn speaker_detail_redirects_to_canonical_slug() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/public/speakers/get-one/3",
        envelope(json!({ "id": 3, "name": "Ada Obi", "portfolio": "Engineer", "event_id": 1 })),
    )
    .await;
    mount_get(&server, "/public/events/get-all", envelope(json!([{ "id": 1, "title": "Salon" }]))).await;
    let app = site(&server);

    let response = send(&app, get("/speakers/3/someone-else")).await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/speakers/3/ada-obi");

    let response = send(&app, get("/speakers/3/ada-obi")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Ada Obi"));
    assert!(html.contains("Spoke at"));
    assert!(html.contains(r#"<a href="/events/1">Salon</a>"#));
}

#[tokio::test]
async fn missing_speaker_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/public/speakers/get-one/4"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "success": false, "message": "Speaker not found" })),
        )
        .mount(&server)
        .await;
    mount_get(&server, "/public/events/get-all", envelope(json!([]))).await;

    let response = send(&site(&server), get("/speakers/4")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Failed to load speaker. Please try again later."));
}

#[tokio::test]
async fn newsletter_rejection_shows_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/public/newsletter/subscribe"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": false, "message": "Already subscribed" })),
        )
        .mount(&server)
        .await;

    let response = send(&site(&server), post_form("/newsletter", "email=ada%40example.com")).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(body_text(response).await.contains("Already subscribed"));
}

#[tokio::test]
async fn newsletter_garbled_reply_shows_generic_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/public/newsletter/subscribe"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let response = send(&site(&server), post_form("/newsletter", "email=ada%40example.com")).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains("Failed to subscribe. Please try again later."));
    assert!(html.contains("Subscription failed"));
}
