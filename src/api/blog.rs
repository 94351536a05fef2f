use reqwest::Method;
use serde::Deserialize;
use tracing::warn;

use crate::api::{ApiClient, Envelope};
use crate::error::ApiError;
use crate::models::{BlogCategory, BlogPost};

/// Response of the like endpoint. `likes` sits next to `success`, not in `data`.
#[derive(Debug, Deserialize)]
pub struct LikesUpdate {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    #[serde(default)]
    pub likes: u64,
}

impl ApiClient {
    pub async fn get_all_blog_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        self.get_data("/public/blog/get-all", "Failed to fetch blog posts").await
    }

    pub async fn get_blog_post_by_id(&self, id: i64) -> Result<BlogPost, ApiError> {
        self.get_data(&format!("/public/blog/get-one/{id}"), "Failed to fetch blog post")
            .await
    }

    pub async fn get_all_blog_categories(&self) -> Result<Vec<BlogCategory>, ApiError> {
        self.get_data("/public/blog-categories/get-all", "Failed to fetch blog categories")
            .await
    }

    /// Best effort: failures are logged and otherwise ignored.
    pub async fn increment_blog_views(&self, id: i64) {
        let path = format!("/public/blog/increment-views/{id}");
        let fallback = "Failed to increment views";

        let result = self
            .send::<(), Envelope<serde_json::Value>>(Method::POST, &path, None, fallback)
            .await
            .and_then(|envelope| {
                if envelope.success {
                    Ok(())
                } else {
                    Err(ApiError::Rejected {
                        endpoint: path.clone(),
                        message: envelope.message.unwrap_or_else(|| fallback.to_string()),
                    })
                }
            });

        if let Err(e) = result {
            warn!("Error incrementing views for post {}: {}", id, e);
        }
    }

    /// Returns the new like total reported by the server.
    pub async fn increment_blog_likes(&self, id: i64) -> Result<LikesUpdate, ApiError> {
        let path = format!("/public/blog/increment-likes/{id}");
        let fallback = "Failed to increment likes";

        let update: LikesUpdate = self.send::<(), _>(Method::POST, &path, None, fallback).await?;
        if !update.success {
            return Err(ApiError::Rejected {
                endpoint: path,
                message: update.message.unwrap_or_else(|| fallback.to_string()),
            });
        }
        Ok(update)
    }
}
