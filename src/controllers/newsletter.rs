use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::post,
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::views::{
    pages::{newsletter_result, INVALID_EMAIL},
    render, render_with_status,
};
use crate::AppState;

pub const SUBSCRIBED: &str = "Successfully subscribed to the newsletter.";
pub const SUBSCRIBE_FAILED: &str = "Failed to subscribe. Please try again later.";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/newsletter", post(subscribe))
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewsletterForm {
    #[serde(default)]
    #[validate(email)]
    pub email: String,
}

pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewsletterForm>,
) -> Response {
    let form = NewsletterForm {
        email: form.email.trim().to_string(),
    };
    if form.email.is_empty() || form.validate().is_err() {
        return render_with_status(StatusCode::UNPROCESSABLE_ENTITY, newsletter_result(false, INVALID_EMAIL));
    }

    match state.api.subscribe_newsletter(&form.email).await {
        Ok(subscription) => {
            info!("Newsletter subscription accepted");
            let message = if subscription.message.is_empty() {
                SUBSCRIBED
            } else {
                subscription.message.as_str()
            };
            render(newsletter_result(true, message))
        }
        Err(e) => render_with_status(
            StatusCode::BAD_GATEWAY,
            newsletter_result(false, e.user_message().unwrap_or(SUBSCRIBE_FAILED)),
        ),
    }
}
