use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ApiClient {
    pub async fn subscribe_newsletter(&self, email: &str) -> Result<Subscription, ApiError> {
        let path = "/public/newsletter/subscribe";
        let fallback = "Failed to subscribe to newsletter";

        let subscription: Subscription = self
            .send(Method::POST, path, Some(&SubscribeRequest { email }), fallback)
            .await?;
        if !subscription.success {
            return Err(ApiError::Rejected {
                endpoint: path.to_string(),
                message: if subscription.message.is_empty() {
                    fallback.to_string()
                } else {
                    subscription.message
                },
            });
        }
        Ok(subscription)
    }
}
